#[cfg(test)]
mod tests {
    use crate::helpers::fixtures::classroom;
    use crate::helpers::{json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::grading::submit_attempt;
    use tower::ServiceExt;

    fn request(method: &str, uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn delete_removes_test_and_its_results() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;
        let test_id = data.test.test.id;
        submit_attempt(state.db(), test_id, data.students[0].id, &[])
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(request("DELETE", &format!("/api/teacher/tests/{test_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Test deleted successfully");

        let response = app
            .clone()
            .oneshot(request("GET", &format!("/api/results/test/{test_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(request("DELETE", &format!("/api/teacher/tests/{test_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
