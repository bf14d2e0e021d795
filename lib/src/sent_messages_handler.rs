use crate::error::ReconcilerError;
use crate::push_contact_api_token_getter::PushContactApiTokenGetter;
use crate::push_contact_client::{HttpPushContactClient, PushContactClient};
use crate::sent_message::{SendResult, SendResultBatch};
use crate::sent_messages_outcome::SentMessagesOutcome;
use crate::settings::ReconcilerSettings;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Removes push contacts whose device token was permanently rejected by the push provider.
///
/// Holds no state of its own besides configuration and collaborators, so clones can be handed to
/// independent tasks freely.
#[derive(Clone)]
pub struct SentMessagesHandler {
    settings: Arc<ReconcilerSettings>,
    token_getter: Arc<dyn PushContactApiTokenGetter>,
    push_contact_client: Arc<dyn PushContactClient>,
}

impl SentMessagesHandler {
    pub fn new(
        settings: ReconcilerSettings,
        token_getter: Arc<dyn PushContactApiTokenGetter>,
        push_contact_client: Arc<dyn PushContactClient>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            token_getter,
            push_contact_client,
        }
    }

    pub fn with_http_client(
        settings: ReconcilerSettings,
        token_getter: Arc<dyn PushContactApiTokenGetter>,
    ) -> Result<Self, ReconcilerError> {
        let push_contact_client = HttpPushContactClient::new(&settings)?;

        Ok(Self::new(settings, token_getter, Arc::new(push_contact_client)))
    }

    pub fn settings(&self) -> &ReconcilerSettings {
        &self.settings
    }

    /// Only a missing batch is reported as `Err`. Every failure past that point is logged and
    /// described by the returned outcome instead.
    #[instrument(skip_all, name = "handle_sent_messages")]
    pub async fn handle_sent_messages(
        &self,
        batch: Option<&SendResultBatch>,
    ) -> Result<SentMessagesOutcome, ReconcilerError> {
        let batch = batch.ok_or_else(|| ReconcilerError::invalid_argument("batch", "Sent messages batch is required"))?;

        if batch.is_empty() {
            return Ok(SentMessagesOutcome::Empty);
        }

        let (sent_messages_with_not_valid_device_token, not_handled): (Vec<SendResult>, Vec<SendResult>) =
            batch.results().iter().cloned().partition(|it| self.has_not_valid_device_token(it));

        if sent_messages_with_not_valid_device_token.is_empty() {
            warn!(not_handling_sent_messages = ?not_handled, "Not handling following sent messages");

            return Ok(SentMessagesOutcome::NothingToHandle { not_handled });
        }

        let not_valid_device_tokens = sent_messages_with_not_valid_device_token
            .iter()
            .map(|it| it.device_token.clone())
            .collect::<Vec<String>>();

        // TODO: queue failed deletions so they can be retried instead of only logging them
        match self.delete_push_contacts(&not_valid_device_tokens).await {
            Ok(200) => {
                info!(deleted = not_valid_device_tokens.len(), "Deleted push contacts with not valid device tokens");

                Ok(SentMessagesOutcome::Deleted {
                    device_tokens: not_valid_device_tokens,
                    not_handled,
                })
            },
            Ok(status_code) => {
                error!(
                    not_valid_device_tokens = ?not_valid_device_tokens,
                    status_code,
                    "Error deleting push contacts with following device tokens"
                );

                Ok(SentMessagesOutcome::DeleteRejected {
                    device_tokens: not_valid_device_tokens,
                    status_code,
                    not_handled,
                })
            },
            Err(error) => {
                error!(
                    sent_messages = ?sent_messages_with_not_valid_device_token,
                    kind = ?error.kind,
                    %error,
                    "Error handling following sent messages"
                );

                Ok(SentMessagesOutcome::Failed {
                    fatal: sent_messages_with_not_valid_device_token,
                    error,
                    not_handled,
                })
            },
        }
    }

    fn has_not_valid_device_token(
        &self,
        sent_message: &SendResult,
    ) -> bool {
        !sent_message.is_success && sent_message.error_code().is_some_and(|code| self.settings.is_fatal(code))
    }

    async fn delete_push_contacts(
        &self,
        device_tokens: &[String],
    ) -> Result<u16, ReconcilerError> {
        let push_contact_api_token = self.token_getter.get_token().await?;

        self.push_contact_client.delete_by_device_tokens(device_tokens, &push_contact_api_token).await
    }
}
