use crate::environment::Environment;
use crate::error::ReconcilerError;
use crate::messaging_error_code::MessagingErrorCode;
use std::collections::HashSet;

pub const DEFAULT_FATAL_MESSAGING_ERROR_CODES: &str = "UNREGISTERED,INVALID_ARGUMENT";
pub const DEFAULT_HTTP_TIMEOUT_IN_MILLIS: u64 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilerSettings {
    pub fatal_messaging_error_codes: HashSet<MessagingErrorCode>,
    pub push_contact_api_url: String,
    pub http_timeout_in_millis: Option<u64>,
}

impl ReconcilerSettings {
    pub fn new(push_contact_api_url: &str) -> Self {
        Self {
            fatal_messaging_error_codes: parse_codes(DEFAULT_FATAL_MESSAGING_ERROR_CODES.split(',')),
            push_contact_api_url: push_contact_api_url.to_string(),
            http_timeout_in_millis: None,
        }
    }

    pub fn from_env() -> Result<Self, ReconcilerError> {
        let push_contact_api_url = Environment::required_string("PUSH_CONTACT_API_URL")?;
        let fatal_messaging_error_codes = Environment::list("FATAL_MESSAGING_ERROR_CODES", DEFAULT_FATAL_MESSAGING_ERROR_CODES);
        if fatal_messaging_error_codes.is_empty() {
            return Err(ReconcilerError::configuration(
                "FATAL_MESSAGING_ERROR_CODES is empty",
                "At least one fatal messaging error code must be configured",
            ));
        }
        let http_timeout_in_millis = Environment::u64("HTTP_TIMEOUT_IN_MILLIS", DEFAULT_HTTP_TIMEOUT_IN_MILLIS)?;

        Ok(Self::new(&push_contact_api_url)
            .with_fatal_messaging_error_codes(fatal_messaging_error_codes.iter().map(|it| it.as_str()))
            .with_http_timeout_in_millis(http_timeout_in_millis))
    }

    pub fn with_fatal_messaging_error_codes<'a>(
        self,
        codes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            fatal_messaging_error_codes: parse_codes(codes),
            push_contact_api_url: self.push_contact_api_url,
            http_timeout_in_millis: self.http_timeout_in_millis,
        }
    }

    pub fn with_http_timeout_in_millis(
        self,
        http_timeout_in_millis: u64,
    ) -> Self {
        Self {
            fatal_messaging_error_codes: self.fatal_messaging_error_codes,
            push_contact_api_url: self.push_contact_api_url,
            http_timeout_in_millis: Some(http_timeout_in_millis),
        }
    }

    pub fn is_fatal(
        &self,
        code: &MessagingErrorCode,
    ) -> bool {
        self.fatal_messaging_error_codes.contains(code)
    }
}

fn parse_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> HashSet<MessagingErrorCode> {
    codes.into_iter().filter(|it| !it.trim().is_empty()).map(MessagingErrorCode::from).collect()
}
