use crate::error::{ErrorKind, ReconcilerError};
use crate::http_gateway::HttpGateway;
use crate::settings::{ReconcilerSettings, DEFAULT_HTTP_TIMEOUT_IN_MILLIS};
use async_trait::async_trait;
use tracing::instrument;

/// Registry of push contacts, keyed by device token.
#[async_trait]
pub trait PushContactClient: Send + Sync {
    /// Deletes every push contact owning one of `device_tokens` and returns the registry's status code.
    async fn delete_by_device_tokens(
        &self,
        device_tokens: &[String],
        bearer_token: &str,
    ) -> Result<u16, ReconcilerError>;
}

#[derive(Clone)]
pub struct HttpPushContactClient {
    http_gateway: HttpGateway,
    push_contact_url: String,
}

impl HttpPushContactClient {
    pub fn new(settings: &ReconcilerSettings) -> Result<Self, ReconcilerError> {
        let http_gateway = HttpGateway::new(settings.http_timeout_in_millis.unwrap_or(DEFAULT_HTTP_TIMEOUT_IN_MILLIS))?;

        Ok(Self {
            http_gateway,
            push_contact_url: format!("{}/PushContact", settings.push_contact_api_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl PushContactClient for HttpPushContactClient {
    #[instrument(skip_all, name = "delete_push_contacts")]
    async fn delete_by_device_tokens(
        &self,
        device_tokens: &[String],
        bearer_token: &str,
    ) -> Result<u16, ReconcilerError> {
        let body = serde_json::to_string(device_tokens)
            .map_err(|error| ReconcilerError::new(ErrorKind::Unexpected, &error.to_string(), "Failed to serialize device tokens"))?;

        let response = self
            .http_gateway
            .client
            .delete(&self.push_contact_url)
            .header("Authorization", format!("Bearer {bearer_token}"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|error| ReconcilerError::registry_call(&error.to_string(), "Failed to call push contact api"))?;

        Ok(response.status().as_u16())
    }
}
