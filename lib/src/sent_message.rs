use crate::messaging_error_code::MessagingErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendError {
    pub messaging_error_code: Option<MessagingErrorCode>,
    pub message: Option<String>,
}

/// Outcome of one delivery attempt, as reported by the push provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendResult {
    pub message_id: Option<String>,
    pub device_token: String,
    pub is_success: bool,
    #[serde(default, alias = "exception")]
    pub error: Option<SendError>,
}

impl SendResult {
    pub fn success(
        message_id: &str,
        device_token: &str,
    ) -> Self {
        Self {
            message_id: Some(message_id.to_string()),
            device_token: device_token.to_string(),
            is_success: true,
            error: None,
        }
    }

    pub fn failure(
        message_id: Option<&str>,
        device_token: &str,
        messaging_error_code: MessagingErrorCode,
    ) -> Self {
        Self {
            message_id: message_id.map(|it| it.to_string()),
            device_token: device_token.to_string(),
            is_success: false,
            error: Some(SendError {
                messaging_error_code: Some(messaging_error_code),
                message: None,
            }),
        }
    }

    pub fn error_code(&self) -> Option<&MessagingErrorCode> {
        self.error.as_ref().and_then(|it| it.messaging_error_code.as_ref())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendResultBatch {
    pub responses: Option<Vec<SendResult>>,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub failure_count: u32,
}

impl SendResultBatch {
    pub fn new(responses: Vec<SendResult>) -> Self {
        let success = responses.iter().filter(|it| it.is_success).count();
        let success_count = u32::try_from(success).unwrap_or(u32::MAX);
        let failure_count = u32::try_from(responses.len() - success).unwrap_or(u32::MAX);

        Self {
            responses: Some(responses),
            success_count,
            failure_count,
        }
    }

    pub fn results(&self) -> &[SendResult] {
        self.responses.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{SendResult, SendResultBatch};
    use crate::messaging_error_code::MessagingErrorCode;

    #[test]
    fn should_count_successes_and_failures() {
        let batch = SendResultBatch::new(vec![
            SendResult::success("1", "A"),
            SendResult::failure(None, "B", MessagingErrorCode::Unregistered),
            SendResult::failure(None, "C", MessagingErrorCode::Internal),
        ]);

        assert_eq!(1, batch.success_count);
        assert_eq!(2, batch.failure_count);
    }
}
