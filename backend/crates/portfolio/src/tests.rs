//! Router tests for the portfolio crate
//! Public reads, admin mutations, and the bearer gate in front of them

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::{AuthConfig, TokenService};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use chrono::{TimeDelta, Utc};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryPortfolioRepository;
    use crate::presentation::router::portfolio_router_generic;

    struct TestApp {
        router: Router,
        tokens: Arc<TokenService>,
    }

    impl TestApp {
        fn new() -> Self {
            let tokens = Arc::new(TokenService::from_config(&AuthConfig::with_random_secret()));
            let router =
                portfolio_router_generic(InMemoryPortfolioRepository::new(), tokens.clone());
            Self { router, tokens }
        }

        fn bearer(&self) -> String {
            format!("Bearer {}", self.tokens.issue("admin").unwrap().token)
        }

        async fn send(
            &self,
            method: Method,
            uri: &str,
            authorization: Option<&str>,
            body: Option<Value>,
        ) -> Response {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(value) = authorization {
                builder = builder.header(header::AUTHORIZATION, value);
            }
            let body = match body {
                Some(json) => {
                    builder = builder.header(header::CONTENT_TYPE, "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };
            self.router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap()
        }

        async fn get_json(&self, uri: &str) -> Value {
            let response = self.send(Method::GET, uri, None, None).await;
            assert_eq!(response.status(), StatusCode::OK);
            json_body(response).await
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn project(title: &str, status: &str) -> Value {
        json!({
            "title": title,
            "description": format!("{} description", title),
            "tech_stack": ["Rust", "axum"],
            "status": status,
        })
    }

    fn experience(title: &str, start_date: &str, status: &str) -> Value {
        json!({
            "title": title,
            "company": "Acme",
            "type": "job",
            "description": "Built the backend",
            "start_date": start_date,
            "status": status,
        })
    }

    #[tokio::test]
    async fn test_mutations_without_valid_token_never_apply() {
        let app = TestApp::new();
        let expired = app
            .tokens
            .issue_at("admin", Utc::now() - TimeDelta::days(8))
            .unwrap();
        let expired = format!("Bearer {}", expired.token);
        let forged = format!(
            "Bearer {}",
            TokenService::from_config(&AuthConfig::with_random_secret())
                .issue("admin")
                .unwrap()
                .token
        );

        for authorization in [None, Some("Bearer garbage"), Some(expired.as_str()), Some(forged.as_str())] {
            let response = app
                .send(Method::POST, "/admin/projects", authorization, Some(project("Site", "published")))
                .await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let response = app
                .send(Method::PUT, "/admin/profile", authorization, Some(json!({
                    "name": "Jane", "title": "Engineer", "bio": "Hi", "email": "jane@example.com"
                })))
                .await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        assert_eq!(app.get_json("/projects?status=all").await, json!([]));
        assert_eq!(app.get_json("/profile").await, Value::Null);
    }

    #[tokio::test]
    async fn test_delete_without_token_keeps_item() {
        let app = TestApp::new();
        let bearer = app.bearer();

        let created = app
            .send(Method::POST, "/admin/projects", Some(bearer.as_str()), Some(project("Keep", "published")))
            .await;
        assert_eq!(created.status(), StatusCode::OK);
        let id = json_body(created).await["id"].as_str().unwrap().to_string();

        let response = app
            .send(Method::DELETE, &format!("/admin/projects/{}", id), None, None)
            .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let fetched = app.get_json(&format!("/projects/{}", id)).await;
        assert_eq!(fetched["title"], "Keep");
    }

    #[tokio::test]
    async fn test_project_crud() {
        let app = TestApp::new();
        let bearer = app.bearer();

        let created = app
            .send(Method::POST, "/admin/projects", Some(bearer.as_str()), Some(project("Site", "draft")))
            .await;
        assert_eq!(created.status(), StatusCode::OK);
        let created = json_body(created).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["status"], "draft");
        assert_eq!(created["featured"], false);

        // Drafts are hidden from the default listing
        assert_eq!(app.get_json("/projects").await, json!([]));
        assert_eq!(app.get_json("/projects?status=draft").await[0]["id"], id.as_str());

        let updated = app
            .send(
                Method::PUT,
                &format!("/admin/projects/{}", id),
                Some(bearer.as_str()),
                Some(project("Site v2", "published")),
            )
            .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let updated = json_body(updated).await;
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["created_at"], created["created_at"]);
        assert_eq!(updated["title"], "Site v2");

        assert_eq!(app.get_json("/projects").await[0]["title"], "Site v2");

        let deleted = app
            .send(Method::DELETE, &format!("/admin/projects/{}", id), Some(bearer.as_str()), None)
            .await;
        assert_eq!(deleted.status(), StatusCode::OK);
        assert_eq!(
            json_body(deleted).await,
            json!({"message": "Project deleted successfully"})
        );

        let missing = app.send(Method::GET, &format!("/projects/{}", id), None, None).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(missing).await["detail"], "Project not found");
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let app = TestApp::new();
        let bearer = app.bearer();

        for id in ["not-a-uuid", "67e55044-10b1-426f-9247-bb680e5fe0c8"] {
            let response = app.send(Method::GET, &format!("/projects/{}", id), None, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let response = app
                .send(
                    Method::PUT,
                    &format!("/admin/projects/{}", id),
                    Some(bearer.as_str()),
                    Some(project("X", "published")),
                )
                .await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let response = app
                .send(Method::DELETE, &format!("/admin/experiences/{}", id), Some(bearer.as_str()), None)
                .await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(json_body(response).await["detail"], "Experience not found");
        }
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let app = TestApp::new();
        let bearer = app.bearer();

        let response = app
            .send(Method::POST, "/admin/projects", Some(bearer.as_str()), Some(project("  ", "published")))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .send(Method::POST, "/admin/projects", Some(bearer.as_str()), Some(project("Site", "archived")))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let mut bad_kind = experience("Engineer", "2022-01", "published");
        bad_kind["type"] = json!("contract");
        let response = app
            .send(Method::POST, "/admin/experiences", Some(bearer.as_str()), Some(bad_kind))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.send(Method::GET, "/projects?status=archived", None, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(app.get_json("/projects?status=all").await, json!([]));
    }

    #[tokio::test]
    async fn test_experiences_listing() {
        let app = TestApp::new();
        let bearer = app.bearer();

        for (title, start, status) in [
            ("Intern", "2019-06", "published"),
            ("Engineer", "2022-01", "published"),
            ("Side gig", "2023-03", "draft"),
        ] {
            let response = app
                .send(Method::POST, "/admin/experiences", Some(bearer.as_str()), Some(experience(title, start, status)))
                .await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let published = app.get_json("/experiences").await;
        let titles: Vec<&str> = published
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Engineer", "Intern"]);
        assert_eq!(published[0]["type"], "job");

        assert_eq!(app.get_json("/experiences?status=").await.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_profile_upsert() {
        let app = TestApp::new();
        let bearer = app.bearer();

        assert_eq!(app.get_json("/profile").await, Value::Null);

        let body = json!({
            "name": "Jane", "title": "Engineer", "bio": "Builds APIs",
            "email": "jane@example.com", "skills": ["Rust"]
        });
        let first = app
            .send(Method::PUT, "/admin/profile", Some(bearer.as_str()), Some(body))
            .await;
        assert_eq!(first.status(), StatusCode::OK);
        let first = json_body(first).await;

        let body = json!({
            "name": "Jane Doe", "title": "Engineer", "bio": "Builds APIs",
            "email": "jane@example.com", "github": "janedoe"
        });
        let second = json_body(
            app.send(Method::PUT, "/admin/profile", Some(bearer.as_str()), Some(body))
                .await,
        )
        .await;

        assert_eq!(first["id"], second["id"]);
        let stored = app.get_json("/profile").await;
        assert_eq!(stored["name"], "Jane Doe");
        assert_eq!(stored["github"], "janedoe");
    }
}
