use serde_json::json;

use crate::common::{TestApp, routes};

mod creation {
    use super::*;

    #[tokio::test]
    async fn hashtag_can_be_created() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .post_with_token(routes::HASHTAGS, &json!({"name": "sunset"}), &token)
            .await;

        assert_eq!(res.status, 201);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["name"], "sunset");
    }

    #[tokio::test]
    async fn duplicate_name_conflicts_and_leaves_a_single_row() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        let body = json!({"name": "sunset"});

        let first = app.post_with_token(routes::HASHTAGS, &body, &token).await;
        assert_eq!(first.status, 201, "First create failed: {}", first.text);

        let res = app.post_with_token(routes::HASHTAGS, &body, &token).await;
        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "CONFLICT");

        let list = app.get_with_token(routes::HASHTAGS, &token).await;
        let matching = list.body.as_array().unwrap().iter().filter(|h| h["name"] == "sunset");
        assert_eq!(matching.count(), 1);
    }

    #[tokio::test]
    async fn name_is_trimmed_before_storing() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .post_with_token(routes::HASHTAGS, &json!({"name": "  beach "}), &token)
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["name"], "beach");
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app
            .post_with_token(routes::HASHTAGS, &json!({"name": "   "}), &token)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn unauthenticated_create_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(routes::HASHTAGS, &json!({"name": "sunset"}))
            .await;

        assert_eq!(res.status, 401);
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn all_hashtags_are_listed() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        app.create_hashtag("sunset", &token).await;
        app.create_hashtag("beach", &token).await;

        let res = app.get_with_token(routes::HASHTAGS, &token).await;

        assert_eq!(res.status, 200);
        let names: Vec<&str> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["beach", "sunset"]);
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn search_is_a_case_insensitive_substring_match() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        for name in ["Cat", "cats", "scatter", "dog"] {
            app.create_hashtag(name, &token).await;
        }

        let res = app
            .get_with_token(&routes::hashtag_search("cat"), &token)
            .await;

        assert_eq!(res.status, 200);
        let mut names: Vec<&str> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["name"].as_str().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Cat", "cats", "scatter"]);
    }

    #[tokio::test]
    async fn empty_query_matches_nothing() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        app.create_hashtag("sunset", &token).await;

        let res = app
            .get_with_token(&routes::hashtag_search(""), &token)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn like_wildcards_in_the_query_are_literal() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");
        app.create_hashtag("100%cotton", &token).await;
        app.create_hashtag("cotton", &token).await;

        let res = app
            .get_with_token(&routes::hashtag_search("100%25cotton"), &token)
            .await;

        assert_eq!(res.status, 200);
        let names: Vec<&str> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["100%cotton"]);
    }
}
