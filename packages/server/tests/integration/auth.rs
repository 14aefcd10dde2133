use crate::common::{TestApp, TestResponse, routes};

mod identity_resolution {
    use super::*;

    #[tokio::test]
    async fn first_request_creates_the_user_lazily() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let res = app.get_with_token(routes::ME, &token).await;

        assert_eq!(res.status, 200);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["external_id"], "auth0|alice");
        assert_eq!(res.body["username"], "alice");
    }

    #[tokio::test]
    async fn repeated_requests_resolve_to_the_same_user() {
        let app = TestApp::spawn().await;
        let token = app.token_for("auth0|alice", "alice");

        let first = app.get_with_token(routes::ME, &token).await;
        assert_eq!(first.status, 200);
        let second = app.get_with_token(routes::ME, &token).await;
        assert_eq!(second.status, 200);

        assert_eq!(first.body["id"], second.body["id"]);
    }

    #[tokio::test]
    async fn stored_username_is_not_renamed_by_a_newer_token() {
        let app = TestApp::spawn().await;

        let res = app
            .get_with_token(routes::ME, &app.token_for("auth0|alice", "alice"))
            .await;
        assert_eq!(res.status, 200);

        let res = app
            .get_with_token(routes::ME, &app.token_for("auth0|alice", "alice-renamed"))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["username"], "alice");
    }

    #[tokio::test]
    async fn username_collision_with_a_different_identity_conflicts() {
        let app = TestApp::spawn().await;

        let res = app
            .get_with_token(routes::ME, &app.token_for("auth0|alice", "alice"))
            .await;
        assert_eq!(res.status, 200);

        let res = app
            .get_with_token(routes::ME, &app.token_for("auth0|impostor", "alice"))
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "CONFLICT");
    }
}

mod token_verification {
    use super::*;

    #[tokio::test]
    async fn request_without_token_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::ME).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_MISSING");
    }

    #[tokio::test]
    async fn request_with_malformed_token_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get_with_token(routes::ME, "not-a-valid-jwt").await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }

    #[tokio::test]
    async fn request_with_non_bearer_auth_scheme_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .client
            .get(format!("http://{}{}", app.addr, routes::ME))
            .header("Authorization", "Basic abc123")
            .send()
            .await
            .expect("Failed to send request");

        let res = TestResponse::from_response(res).await;
        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }
}
