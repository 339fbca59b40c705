#[cfg(test)]
mod tests {
    use crate::helpers::fixtures::classroom;
    use crate::helpers::{json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn list_users_filters_by_role() {
        let (app, state) = make_test_app().await;
        classroom(state.db()).await;

        let response = app.clone().oneshot(get("/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 3);

        let response = app.oneshot(get("/users?role=student")).await.unwrap();
        let json = json_body(response).await;
        let students = json["data"].as_array().unwrap();
        assert_eq!(students.len(), 2);
        assert!(students.iter().all(|u| u["role"] == "student"));
    }

    #[tokio::test]
    async fn get_user_by_id() {
        let (app, state) = make_test_app().await;
        let data = classroom(state.db()).await;

        let response = app
            .clone()
            .oneshot(get(&format!("/users/{}", data.teacher.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["name"], "Ms Naidoo");

        let response = app.clone().oneshot(get("/users/9999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get("/users/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
