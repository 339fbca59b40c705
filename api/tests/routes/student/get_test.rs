#[cfg(test)]
mod tests {
    use crate::helpers::fixtures::classroom;
    use crate::helpers::{json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::grading::{Answer, submit_attempt};
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn student_view_hides_correct_option() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .oneshot(get(&format!("/api/student/tests/{}", data.test.test.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        for question in json["data"]["questions"].as_array().unwrap() {
            assert!(question.get("correctOption").is_none());
            assert!(question["options"].is_array());
        }
    }

    #[tokio::test]
    async fn lists_available_tests() {
        let (app, state) = make_test_app().await;
        classroom(state.db()).await;

        let response = app.oneshot(get("/api/student/tests")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["title"], "Fractions");
    }

    #[tokio::test]
    async fn own_attempts_include_grade() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;
        let student = &data.students[0];
        submit_attempt(
            state.db(),
            data.test.test.id,
            student.id,
            &[Answer {
                question_id: data.test.questions[1].id,
                selected_option: 1,
            }],
        )
        .await
        .unwrap();

        let response = app
            .clone()
            .oneshot(get(&format!("/api/student/{}/attempts", student.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        let attempts = json["data"].as_array().unwrap();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0]["testTitle"], "Fractions");
        assert_eq!(attempts[0]["score"], 20);
        assert_eq!(attempts[0]["percentage"], 40);
        assert_eq!(attempts[0]["passed"], false);

        let response = app
            .oneshot(get(&format!("/api/student/{}/attempts", data.teacher.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
