#[cfg(test)]
mod tests {
    use crate::helpers::fixtures::classroom;
    use crate::helpers::{json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::authoring::{QuestionDraft, TestDraft, update_test};
    use db::grading::{Answer, submit_attempt};
    use serde_json::Value;
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn returns_bare_payload_with_students_in_submission_order() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;
        let test_id = data.test.test.id;
        let first_q = data.test.questions[0].id;

        // Pieter submits first with 30/50, Thandi second with 0/50.
        submit_attempt(
            state.db(),
            test_id,
            data.students[1].id,
            &[Answer { question_id: first_q, selected_option: 0 }],
        )
        .await
        .unwrap();
        submit_attempt(state.db(), test_id, data.students[0].id, &[])
            .await
            .unwrap();

        let response = app
            .oneshot(get(&format!("/api/results/test/{test_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert!(json.get("success").is_none());
        assert_eq!(json["testTitle"], "Fractions");
        assert_eq!(json["testSubject"], "Maths");

        let attempts = json["attempts"].as_array().unwrap();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0]["studentId"]["name"], "Pieter");
        assert_eq!(attempts[0]["studentId"]["_id"], data.students[1].id);
        assert_eq!(attempts[0]["score"], 30);
        assert_eq!(attempts[0]["totalPoints"], 50);
        assert_eq!(attempts[0]["testId"], test_id);
        assert!(attempts[0]["_id"].is_i64());
        assert!(attempts[0]["submittedAt"].is_string());
        assert_eq!(attempts[1]["studentId"]["name"], "Thandi");
        assert_eq!(attempts[1]["score"], 0);
    }

    #[tokio::test]
    async fn test_without_attempts_has_empty_list() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .oneshot(get(&format!("/api/results/test/{}", data.test.test.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["attempts"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn unknown_test_is_404_envelope() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/api/results/test/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Test 999 not found");
    }

    #[tokio::test]
    async fn malformed_test_id_is_404() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(get("/api/results/test/64b7f0c2e1a9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Test not found");
    }

    #[tokio::test]
    async fn store_failure_is_500() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;
        let test_id = data.test.test.id;
        state.db().clone().close().await.unwrap();

        let response = app
            .oneshot(get(&format!("/api/results/test/{test_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Database error");
    }

    #[tokio::test]
    async fn attempt_keeps_total_from_submission_time() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;
        let test_id = data.test.test.id;

        submit_attempt(state.db(), test_id, data.students[0].id, &[])
            .await
            .unwrap();

        update_test(
            state.db(),
            test_id,
            TestDraft {
                title: "Fractions".into(),
                subject: "Maths".into(),
                questions: vec![QuestionDraft {
                    text: "1/2 of 8?".into(),
                    options: vec!["4".into(), "2".into()],
                    correct_option: 0,
                    points: 80,
                }],
            },
        )
        .await
        .unwrap();

        let response = app
            .oneshot(get(&format!("/api/results/test/{test_id}")))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["attempts"][0]["totalPoints"], 50);
    }
}
