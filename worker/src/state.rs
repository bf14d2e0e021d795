use crate::infra::error::AppError;
use push_contact_reconciler::push_contact_api_token_getter::StaticPushContactApiTokenGetter;
use push_contact_reconciler::sent_messages_handler::SentMessagesHandler;
use push_contact_reconciler::settings::ReconcilerSettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sent_messages_handler: SentMessagesHandler,
}

impl AppState {
    pub fn new(sent_messages_handler: SentMessagesHandler) -> Self {
        Self { sent_messages_handler }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let settings = ReconcilerSettings::from_env()?;
        let token_getter = StaticPushContactApiTokenGetter::from_env()?;

        let sent_messages_handler = SentMessagesHandler::with_http_client(settings, Arc::new(token_getter))?;

        Ok(Self::new(sent_messages_handler))
    }
}
