use crate::common::{TestApp, routes};

mod upload {
    use super::*;

    #[tokio::test]
    async fn upload_stores_the_photo_with_its_tags() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .upload_with_token("trip.JPG", b"jpeg bytes".to_vec(), Some("beach,sunset"), &token)
            .await;

        assert_eq!(res.status, 201, "Upload failed: {}", res.text);
        assert!(res.body["id"].is_number());

        let key = res.body["s3_key"].as_str().unwrap();
        assert!(key.ends_with(".JPG"), "extension case lost: {key}");

        let url = res.body["public_url"].as_str().unwrap();
        assert_eq!(url, format!("http://photos.test/{key}"));

        assert_eq!(res.hashtag_names(), vec!["beach", "sunset"]);

        // The object itself must be durable in the store.
        assert!(app.store_root.join(key).is_file());
    }

    #[tokio::test]
    async fn duplicate_and_padded_tags_collapse() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .upload_with_token(
                "beach.png",
                b"png bytes".to_vec(),
                Some("sunset, sunset, Beach"),
                &token,
            )
            .await;

        assert_eq!(res.status, 201, "Upload failed: {}", res.text);
        assert_eq!(res.hashtag_names(), vec!["Beach", "sunset"]);
    }

    #[tokio::test]
    async fn upload_without_tags_is_allowed() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .upload_with_token("plain.png", b"png bytes".to_vec(), None, &token)
            .await;

        assert_eq!(res.status, 201, "Upload failed: {}", res.text);
        assert_eq!(res.hashtag_names(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn filename_without_extension_yields_a_bare_key() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .upload_with_token("noext", b"bytes".to_vec(), None, &token)
            .await;

        assert_eq!(res.status, 201, "Upload failed: {}", res.text);
        let key = res.body["s3_key"].as_str().unwrap();
        assert!(!key.contains('.'), "unexpected dot in key: {key}");
    }

    #[tokio::test]
    async fn upload_without_file_field_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let form = reqwest::multipart::Form::new().text("hashtags", "beach");
        let res = app
            .client
            .post(format!("http://{}{}", app.addr, routes::PHOTOS))
            .header("Authorization", format!("Bearer {token}"))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send request");
        let res = crate::common::TestResponse::from_response(res).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn oversized_tag_name_is_rejected_before_storing() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        let long_tag = "x".repeat(65);

        let res = app
            .upload_with_token("a.png", b"bytes".to_vec(), Some(&long_tag), &token)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod retrieval {
    use super::*;

    #[tokio::test]
    async fn uploaded_photo_can_be_fetched_by_id_with_its_tag_set() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        let id = app
            .upload_photo("trip.JPG", Some(" beach , sunset , beach "), &token)
            .await;

        let res = app.get_with_token(&routes::photo(id), &token).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], id);
        assert_eq!(res.hashtag_names(), vec!["beach", "sunset"]);
    }

    #[tokio::test]
    async fn another_users_photo_is_reported_as_not_found() {
        let app = TestApp::spawn().await;
        let alice = app.token_for("auth0|alice", "alice");
        let bob = app.token_for("auth0|bob", "bob");
        let id = app.upload_photo("trip.JPG", None, &alice).await;

        let res = app.get_with_token(&routes::photo(id), &bob).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn nonexistent_photo_is_not_found() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app.get_with_token(&routes::photo(999999), &token).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn listing_returns_only_the_callers_photos() {
        let app = TestApp::spawn().await;
        let alice = app.token_for("auth0|alice", "alice");
        let bob = app.token_for("auth0|bob", "bob");
        app.upload_photo("a.png", None, &alice).await;
        app.upload_photo("b.png", None, &alice).await;
        app.upload_photo("c.png", None, &bob).await;

        let res = app.get_with_token(routes::PHOTOS, &alice).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"], 2);
        assert_eq!(res.body["photos"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn tag_filter_restricts_the_listing() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        let tagged = app.upload_photo("a.png", Some("sunset"), &token).await;
        app.upload_photo("b.png", Some("beach"), &token).await;

        let res = app
            .get_with_token(&routes::photos_with_tag("sunset"), &token)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"], 1);
        assert_eq!(res.body["photos"][0]["id"], tagged);
    }

    #[tokio::test]
    async fn unknown_tag_filter_yields_an_empty_list() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        app.upload_photo("a.png", Some("sunset"), &token).await;

        let res = app
            .get_with_token(&routes::photos_with_tag("nonexistent-tag"), &token)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"], 0);
        assert_eq!(res.body["photos"].as_array().unwrap().len(), 0);
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn deleted_photo_disappears_from_the_listing() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        let id = app.upload_photo("a.png", Some("sunset"), &token).await;

        let res = app.delete_with_token(&routes::photo(id), &token).await;
        assert_eq!(res.status, 204);

        let list = app.get_with_token(routes::PHOTOS, &token).await;
        assert_eq!(list.body["total"], 0);
    }

    #[tokio::test]
    async fn second_delete_of_the_same_photo_is_not_found() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        let id = app.upload_photo("a.png", None, &token).await;

        let first = app.delete_with_token(&routes::photo(id), &token).await;
        assert_eq!(first.status, 204);

        let res = app.delete_with_token(&routes::photo(id), &token).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn another_users_photo_cannot_be_deleted() {
        let app = TestApp::spawn().await;
        let alice = app.token_for("auth0|alice", "alice");
        let bob = app.token_for("auth0|bob", "bob");
        let id = app.upload_photo("a.png", None, &alice).await;

        let res = app.delete_with_token(&routes::photo(id), &bob).await;
        assert_eq!(res.status, 404);

        // Still visible to its owner.
        let res = app.get_with_token(&routes::photo(id), &alice).await;
        assert_eq!(res.status, 200);
    }

    #[tokio::test]
    async fn delete_preserves_the_stored_object() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .upload_with_token("a.png", b"png bytes".to_vec(), None, &token)
            .await;
        assert_eq!(res.status, 201);
        let id = res.id();
        let key = res.body["s3_key"].as_str().unwrap().to_string();

        let del = app.delete_with_token(&routes::photo(id), &token).await;
        assert_eq!(del.status, 204);

        assert!(app.store_root.join(&key).is_file());
    }

    #[tokio::test]
    async fn deleting_a_photo_keeps_its_hashtags() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        let id = app.upload_photo("a.png", Some("sunset"), &token).await;

        let res = app.delete_with_token(&routes::photo(id), &token).await;
        assert_eq!(res.status, 204);

        let tags = app.get_with_token(routes::HASHTAGS, &token).await;
        let names: Vec<&str> = tags
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["sunset"]);
    }
}
