use crate::infra::axum::AppJson;
use crate::infra::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use push_contact_reconciler::error::ReconcilerError;
use push_contact_reconciler::sent_message::SendResultBatch;
use tracing::{error, info};

pub struct SentMessagesRoutes;

impl SentMessagesRoutes {
    pub fn routes(app_state: AppState) -> Router {
        Router::new().route("/", post(sent_messages_handler)).with_state(app_state)
    }
}

/// Accepts a provider send report and reconciles it in the background.
async fn sent_messages_handler(
    State(app_state): State<AppState>,
    AppJson(batch): AppJson<Option<SendResultBatch>>,
) -> Result<StatusCode, AppError> {
    let batch = batch.ok_or_else(|| ReconcilerError::invalid_argument("batch", "Sent messages batch is required"))?;

    info!(results = batch.results().len(), "POST /sent-messages");

    let sent_messages_handler = app_state.sent_messages_handler.clone();
    tokio::spawn(async move {
        if let Err(error) = sent_messages_handler.handle_sent_messages(Some(&batch)).await {
            error!(%error, "Failed to handle sent messages");
        }
    });

    Ok(StatusCode::ACCEPTED)
}
