//! HTTP endpoint the voice platform posts request envelopes to.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::apl::DocumentStore;
use crate::dispatch::SkillRouter;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::error::SkillError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<SkillRouter>,
    pub documents: Arc<DocumentStore>,
    /// Reject envelopes whose timestamp is further than this from now.
    pub timestamp_tolerance_secs: Option<u64>,
}

/// Build the Axum router with the skill endpoint and a health check.
pub fn skill_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(handle_envelope))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "pager-karaoke"
    }))
}

async fn handle_envelope(
    State(state): State<AppState>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, (StatusCode, Json<serde_json::Value>)> {
    if let Some(tolerance) = state.timestamp_tolerance_secs {
        check_timestamp(&envelope, tolerance).map_err(reject)?;
    }

    state
        .router
        .invoke(&envelope, &state.documents)
        .map(Json)
        .map_err(reject)
}

fn check_timestamp(envelope: &RequestEnvelope, tolerance_secs: u64) -> Result<(), SkillError> {
    let age_secs = (Utc::now() - envelope.request.timestamp).num_seconds();
    if age_secs.unsigned_abs() > tolerance_secs {
        return Err(SkillError::StaleRequest {
            age_secs,
            tolerance_secs,
        });
    }
    Ok(())
}

fn reject(err: SkillError) -> (StatusCode, Json<serde_json::Value>) {
    warn!(error = %err, "Rejected request envelope");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::config::SkillConfig;
    use crate::handlers::skill_router;

    fn app(config: &SkillConfig) -> Router {
        skill_routes(AppState {
            router: Arc::new(skill_router(config)),
            documents: Arc::new(DocumentStore::new(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/documents"
            ))),
            timestamp_tolerance_secs: config.timestamp_tolerance_secs,
        })
    }

    fn launch_body(timestamp: &str, application_id: &str) -> Body {
        Body::from(
            serde_json::json!({
                "version": "1.0",
                "session": {
                    "sessionId": "s-1",
                    "application": { "applicationId": application_id },
                    "attributes": {}
                },
                "request": {
                    "type": "LaunchRequest",
                    "requestId": "req-1",
                    "timestamp": timestamp
                }
            })
            .to_string(),
        )
    }

    fn post(body: Body) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(body)
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(&SkillConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn launch_envelope_is_answered() {
        let response = app(&SkillConfig::default())
            .oneshot(post(launch_body("2019-01-10T12:00:00Z", "amzn1.ask.skill.a")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["response"]["card"]["title"], "Pager Karaoke");
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[tokio::test]
    async fn stale_envelope_is_rejected() {
        let config = SkillConfig {
            timestamp_tolerance_secs: Some(150),
            ..SkillConfig::default()
        };
        let response = app(&config)
            .oneshot(post(launch_body("2019-01-10T12:00:00Z", "amzn1.ask.skill.a")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("tolerance is 150s"));
    }

    #[tokio::test]
    async fn fresh_envelope_passes_tolerance() {
        let config = SkillConfig {
            timestamp_tolerance_secs: Some(150),
            ..SkillConfig::default()
        };
        let now = Utc::now().to_rfc3339();
        let response = app(&config)
            .oneshot(post(launch_body(&now, "amzn1.ask.skill.a")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_skill_id_is_rejected() {
        let config = SkillConfig {
            skill_id: Some("amzn1.ask.skill.mine".into()),
            ..SkillConfig::default()
        };
        let response = app(&config)
            .oneshot(post(launch_body("2019-01-10T12:00:00Z", "amzn1.ask.skill.theirs")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_envelope_is_a_client_error() {
        let response = app(&SkillConfig::default())
            .oneshot(post(Body::from("{\"version\": ")))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn malformed_viewport_does_not_block_requests() {
        let body = serde_json::json!({
            "version": "1.0",
            "context": {
                "Viewport": { "shape": "OVAL", "dpi": "unknown" }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "req-2",
                "timestamp": "2019-01-10T12:00:00Z",
                "intent": { "name": "AMAZON.StopIntent" }
            }
        });
        let response = app(&SkillConfig::default())
            .oneshot(post(Body::from(body.to_string())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"]["outputSpeech"]["ssml"], "<speak>Goodbye!</speak>");
    }
}
