use crate::error::ReconcilerError;
use crate::sent_message::SendResult;

/// What a single call to the handler did with a batch.
#[derive(Debug, Clone)]
pub enum SentMessagesOutcome {
    /// No results to look at.
    Empty,
    /// No result carried a fatal error code, nothing was sent to the registry.
    NothingToHandle { not_handled: Vec<SendResult> },
    Deleted {
        device_tokens: Vec<String>,
        not_handled: Vec<SendResult>,
    },
    /// The registry answered with a status other than 200.
    DeleteRejected {
        device_tokens: Vec<String>,
        status_code: u16,
        not_handled: Vec<SendResult>,
    },
    /// Credential acquisition or the delete call itself failed.
    Failed {
        fatal: Vec<SendResult>,
        error: ReconcilerError,
        not_handled: Vec<SendResult>,
    },
}

impl SentMessagesOutcome {
    pub fn not_handled(&self) -> &[SendResult] {
        match self {
            SentMessagesOutcome::Empty => &[],
            SentMessagesOutcome::NothingToHandle { not_handled }
            | SentMessagesOutcome::Deleted { not_handled, .. }
            | SentMessagesOutcome::DeleteRejected { not_handled, .. }
            | SentMessagesOutcome::Failed { not_handled, .. } => not_handled,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, SentMessagesOutcome::Deleted { .. })
    }
}
