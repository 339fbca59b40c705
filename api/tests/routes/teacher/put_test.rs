#[cfg(test)]
mod tests {
    use crate::helpers::fixtures::classroom;
    use crate::helpers::{json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn put_json(uri: &str, body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn update_replaces_questions_and_total() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .oneshot(put_json(
                &format!("/api/teacher/tests/{}", data.test.test.id),
                json!({
                    "title": "Fractions II",
                    "subject": "Maths",
                    "questions": [
                        { "text": "3/4 - 1/4?", "options": ["1/2", "1/4"], "correctOption": 0, "points": 15 }
                    ]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["data"]["title"], "Fractions II");
        assert_eq!(json["data"]["totalPoints"], 15);
        assert_eq!(json["data"]["questions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_test_is_404() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(put_json(
                "/api/teacher/tests/31337",
                json!({
                    "title": "Nothing",
                    "subject": "Maths",
                    "questions": [
                        { "text": "?", "options": ["a", "b"], "correctOption": 0, "points": 1 }
                    ]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
