pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::{ai, anonymize, audit, company, feedback, interview, matching, pipeline};

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generic AI proxy
        .route("/api/ai/text", post(ai::handlers::handle_generate_text))
        .route(
            "/api/ai/multimodal",
            post(ai::handlers::handle_generate_multimodal),
        )
        .route(
            "/api/ai/structured",
            post(ai::handlers::handle_generate_structured),
        )
        // Company profile & compensation
        .route(
            "/api/company/generate-field",
            post(company::handlers::handle_generate_field),
        )
        .route(
            "/api/compensation/calculate",
            post(company::handlers::handle_calculate_compensation),
        )
        // Recruitment tools
        .route("/api/jd/audit", post(audit::handlers::handle_audit))
        .route(
            "/api/interview/questions",
            post(interview::handlers::handle_generate_questions),
        )
        .route(
            "/api/feedback/generate",
            post(feedback::handlers::handle_generate_feedback),
        )
        .route(
            "/api/candidates/anonymize",
            post(anonymize::handlers::handle_anonymize),
        )
        // Candidate matching & broadcast marketplace
        .route(
            "/api/candidates/match",
            post(matching::handlers::handle_match_candidates),
        )
        .route(
            "/api/broadcast/job",
            put(matching::handlers::handle_set_broadcast_job),
        )
        .route(
            "/api/broadcast/matches",
            get(matching::handlers::handle_get_matches),
        )
        // Pipeline store
        .route(
            "/api/pipelines",
            get(pipeline::handlers::handle_list_pipelines)
                .post(pipeline::handlers::handle_create_pipeline),
        )
        .route(
            "/api/pipelines/:name",
            get(pipeline::handlers::handle_get_pipeline),
        )
        .route(
            "/api/pipelines/:name/entries",
            post(pipeline::handlers::handle_append_entry),
        )
        .route(
            "/api/pipelines/:name/entries/:id",
            patch(pipeline::handlers::handle_rename_entry)
                .delete(pipeline::handlers::handle_delete_entry),
        )
        .route(
            "/api/pipelines/:name/reorder",
            post(pipeline::handlers::handle_reorder),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_state() -> AppState {
        AppState::new(Config {
            api_key: None,
            port: 0,
            cors_origin: "*".to_string(),
            rust_log: "info".to_string(),
        })
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(state: AppState, req: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state).oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let (status, body) = send(test_state(), request(Method::GET, "/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = send(test_state(), request(Method::GET, "/api/nope", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_generate_field_without_api_key_is_503() {
        let body = json!({ "field": "culture", "companyName": "Acme Corp" });
        let (status, body) = send(
            test_state(),
            request(Method::POST, "/api/company/generate-field", Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"]["message"].as_str().unwrap().contains("API_KEY"));
    }

    #[tokio::test]
    async fn test_generate_field_rejects_unknown_field() {
        let body = json!({ "field": "salary", "companyName": "Acme Corp" });
        let (status, body) = send(
            test_state(),
            request(Method::POST, "/api/company/generate-field", Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["details"]["fieldErrors"]["field"].is_array());
    }

    #[tokio::test]
    async fn test_ai_text_validates_before_credential_check() {
        let body = json!({ "userQuery": "  ", "systemPrompt": "persona" });
        let (status, body) = send(
            test_state(),
            request(Method::POST, "/api/ai/text", Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["details"]["fieldErrors"]["userQuery"].is_array());
    }

    #[tokio::test]
    async fn test_match_without_api_key_is_503() {
        let body = json!({
            "jobDescription": "Rust engineer",
            "candidates": [{ "id": 1, "anonymizedResult": "profile" }]
        });
        let (status, _) = send(
            test_state(),
            request(Method::POST, "/api/candidates/match", Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_pipeline_crud_over_http() {
        let state = test_state();

        // create
        let (status, body) = send(
            state.clone(),
            request(Method::POST, "/api/pipelines", Some(json!({ "name": "Backend" }))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Backend");

        // duplicate rejected
        let (status, body) = send(
            state.clone(),
            request(Method::POST, "/api/pipelines", Some(json!({ "name": "Backend" }))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["details"]["formErrors"].is_array());

        // append
        let entry = json!({
            "type": "profile",
            "candidateName": "Candidate A",
            "anonymizedResult": "## Work Experience",
            "fitSummaryResult": "Strong fit"
        });
        let (status, created) = send(
            state.clone(),
            request(Method::POST, "/api/pipelines/Backend/entries", Some(entry)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();

        // rename
        let (status, renamed) = send(
            state.clone(),
            request(
                Method::PATCH,
                &format!("/api/pipelines/Backend/entries/{id}"),
                Some(json!({ "candidateName": "Renamed" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed["candidateName"], "Renamed");

        // delete
        let (status, _) = send(
            state.clone(),
            request(
                Method::DELETE,
                &format!("/api/pipelines/Backend/entries/{id}"),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        // list shows the empty pipeline
        let (status, listed) = send(state, request(Method::GET, "/api/pipelines", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["pipelines"][0]["name"], "Backend");
        assert_eq!(listed["pipelines"][0]["entries"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_reorder_over_http_moves_entry() {
        let state = test_state();
        send(
            state.clone(),
            request(Method::POST, "/api/pipelines", Some(json!({ "name": "P" }))),
        )
        .await;
        for name in ["A", "B", "C"] {
            send(
                state.clone(),
                request(
                    Method::POST,
                    "/api/pipelines/P/entries",
                    Some(json!({
                        "type": "profile",
                        "candidateName": name,
                        "anonymizedResult": "text",
                        "fitSummaryResult": ""
                    })),
                ),
            )
            .await;
        }

        let (status, body) = send(
            state,
            request(
                Method::POST,
                "/api/pipelines/P/reorder",
                Some(json!({ "from": 2, "to": 0 })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["candidateName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_broadcast_matches_start_empty() {
        let (status, body) = send(
            test_state(),
            request(Method::GET, "/api/broadcast/matches", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matching"], false);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
    }
}
