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

    fn create_request(body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/api/teacher/tests")
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    fn questions() -> Value {
        json!([
            { "text": "Largest planet?", "options": ["Mars", "Jupiter"], "correctOption": 1, "points": 4 },
            { "text": "Closest star?", "options": ["Sun", "Sirius", "Vega"], "correctOption": 0, "points": 6 }
        ])
    }

    #[tokio::test]
    async fn create_test_sums_question_points() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .oneshot(create_request(json!({
                "teacherId": data.teacher.id,
                "title": "Solar System",
                "subject": "Science",
                "questions": questions()
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["title"], "Solar System");
        assert_eq!(json["data"]["totalPoints"], 10);
        assert_eq!(json["data"]["teacherId"], data.teacher.id);
        let qs = json["data"]["questions"].as_array().unwrap();
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[1]["correctOption"], 0);
        assert_eq!(qs[1]["options"], json!(["Sun", "Sirius", "Vega"]));
    }

    #[tokio::test]
    async fn create_test_rejects_out_of_range_correct_option() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .oneshot(create_request(json!({
                "teacherId": data.teacher.id,
                "title": "Broken",
                "subject": "Science",
                "questions": [
                    { "text": "Pick", "options": ["a", "b"], "correctOption": 2, "points": 1 }
                ]
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Question 1 has no valid correct option");
    }

    #[tokio::test]
    async fn create_test_rejects_total_that_overflows() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .oneshot(create_request(json!({
                "teacherId": data.teacher.id,
                "title": "Huge",
                "subject": "Science",
                "questions": [
                    { "text": "One", "options": ["a", "b"], "correctOption": 0, "points": i64::MAX },
                    { "text": "Two", "options": ["a", "b"], "correctOption": 1, "points": i64::MAX }
                ]
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Total points too large");
    }

    #[tokio::test]
    async fn create_test_requires_questions() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .oneshot(create_request(json!({
                "teacherId": data.teacher.id,
                "title": "Empty",
                "subject": "Science",
                "questions": []
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn students_cannot_author_tests() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .clone()
            .oneshot(create_request(json!({
                "teacherId": data.students[0].id,
                "title": "Mine",
                "subject": "Science",
                "questions": questions()
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(create_request(json!({
                "teacherId": 9999,
                "title": "Ghost",
                "subject": "Science",
                "questions": questions()
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Teacher not found");
    }
}
