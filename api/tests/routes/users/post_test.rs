#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_json(uri: &str, body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn register_creates_user_without_exposing_hash() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post_json(
                "/users/register",
                json!({
                    "name": "Thandi",
                    "email": "Thandi@School.test",
                    "password": "secret1",
                    "role": "student"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "Thandi");
        assert_eq!(json["data"]["email"], "thandi@school.test");
        assert_eq!(json["data"]["role"], "student");
        assert!(json["data"]["_id"].is_i64());
        assert!(json["data"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let (app, _) = make_test_app().await;
        let body = json!({
            "name": "Thandi",
            "email": "thandi@school.test",
            "password": "secret1",
            "role": "student"
        });

        let first = app
            .clone()
            .oneshot(post_json("/users/register", body.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(post_json("/users/register", body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let json = json_body(second).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post_json(
                "/users/register",
                json!({
                    "name": "Thandi",
                    "email": "thandi@school.test",
                    "password": "123",
                    "role": "student"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Password must be at least 6 characters");
    }

    #[tokio::test]
    async fn login_checks_password() {
        let (app, _) = make_test_app().await;
        app.clone()
            .oneshot(post_json(
                "/users/register",
                json!({
                    "name": "Ms Naidoo",
                    "email": "naidoo@school.test",
                    "password": "chalk42",
                    "role": "teacher"
                }),
            ))
            .await
            .unwrap();

        let ok = app
            .clone()
            .oneshot(post_json(
                "/users/login",
                json!({ "email": "naidoo@school.test", "password": "chalk42" }),
            ))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        let json = json_body(ok).await;
        assert_eq!(json["data"]["role"], "teacher");

        let bad = app
            .oneshot(post_json(
                "/users/login",
                json!({ "email": "naidoo@school.test", "password": "wrong!" }),
            ))
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
    }
}
