use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reason reported by the push provider for a failed delivery.
///
/// Values the crate does not know are kept verbatim in [`MessagingErrorCode::Other`],
/// so they can still be configured as fatal.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum MessagingErrorCode {
    Internal,
    InvalidArgument,
    QuotaExceeded,
    SenderIdMismatch,
    ThirdPartyAuthError,
    Unavailable,
    Unregistered,
    Other(String),
}

impl MessagingErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            MessagingErrorCode::Internal => "INTERNAL",
            MessagingErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            MessagingErrorCode::QuotaExceeded => "QUOTA_EXCEEDED",
            MessagingErrorCode::SenderIdMismatch => "SENDER_ID_MISMATCH",
            MessagingErrorCode::ThirdPartyAuthError => "THIRD_PARTY_AUTH_ERROR",
            MessagingErrorCode::Unavailable => "UNAVAILABLE",
            MessagingErrorCode::Unregistered => "UNREGISTERED",
            MessagingErrorCode::Other(code) => code,
        }
    }
}

impl From<&str> for MessagingErrorCode {
    fn from(value: &str) -> Self {
        let normalized = screaming_snake_case(value);

        match normalized.as_str() {
            "INTERNAL" => MessagingErrorCode::Internal,
            "INVALID_ARGUMENT" => MessagingErrorCode::InvalidArgument,
            "QUOTA_EXCEEDED" => MessagingErrorCode::QuotaExceeded,
            "SENDER_ID_MISMATCH" => MessagingErrorCode::SenderIdMismatch,
            "THIRD_PARTY_AUTH_ERROR" => MessagingErrorCode::ThirdPartyAuthError,
            "UNAVAILABLE" => MessagingErrorCode::Unavailable,
            "UNREGISTERED" => MessagingErrorCode::Unregistered,
            _ => MessagingErrorCode::Other(normalized),
        }
    }
}

/// `InvalidToken`, `invalid-token` and `invalid_token` all become `INVALID_TOKEN`.
fn screaming_snake_case(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len() + 4);
    let mut previous: Option<char> = None;

    for current in value.trim().chars() {
        let current = if current == '-' || current.is_whitespace() { '_' } else { current };

        if current.is_uppercase() && previous.is_some_and(|it| it.is_lowercase() || it.is_ascii_digit()) {
            normalized.push('_');
        }

        normalized.extend(current.to_uppercase());
        previous = Some(current);
    }

    normalized
}

impl From<String> for MessagingErrorCode {
    fn from(value: String) -> Self {
        MessagingErrorCode::from(value.as_str())
    }
}

impl From<MessagingErrorCode> for String {
    fn from(value: MessagingErrorCode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for MessagingErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(MessagingErrorCode::from(value))
    }
}

impl fmt::Display for MessagingErrorCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
