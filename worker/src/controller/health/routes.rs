use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::debug;

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn routes(app_state: AppState) -> Router {
        Router::new().route("/", get(health_handler)).with_state(app_state)
    }
}

/// Reports the fatal codes in use, so a misconfigured reconciler is visible from outside.
async fn health_handler(State(app_state): State<AppState>) -> Json<Value> {
    debug!("GET /health");

    let mut fatal_messaging_error_codes = app_state
        .sent_messages_handler
        .settings()
        .fatal_messaging_error_codes
        .iter()
        .map(|it| it.to_string())
        .collect::<Vec<String>>();
    fatal_messaging_error_codes.sort();

    Json(json!({
        "status": "up",
        "fatalMessagingErrorCodes": fatal_messaging_error_codes,
    }))
}
