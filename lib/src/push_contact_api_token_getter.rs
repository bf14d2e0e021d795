use crate::environment::Environment;
use crate::error::ReconcilerError;
use async_trait::async_trait;

/// Supplies the bearer credential used against the push contact API.
#[async_trait]
pub trait PushContactApiTokenGetter: Send + Sync {
    async fn get_token(&self) -> Result<String, ReconcilerError>;
}

/// Hands out a credential provisioned through configuration.
#[derive(Clone)]
pub struct StaticPushContactApiTokenGetter {
    token: String,
}

impl StaticPushContactApiTokenGetter {
    pub fn new(token: &str) -> Self {
        Self { token: token.to_string() }
    }

    pub fn from_env() -> Result<Self, ReconcilerError> {
        Ok(Self::new(&Environment::required_string("PUSH_CONTACT_API_TOKEN")?))
    }
}

#[async_trait]
impl PushContactApiTokenGetter for StaticPushContactApiTokenGetter {
    async fn get_token(&self) -> Result<String, ReconcilerError> {
        let token = self.token.trim();

        if token.is_empty() {
            return Err(ReconcilerError::credential("Empty token", "Push contact api token is not configured"));
        }

        Ok(token.to_string())
    }
}
