use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed over no batch at all.
    InvalidArgument,
    CredentialFailure,
    RegistryCallFailure,
    Configuration,
    Unexpected,
}

#[derive(Debug, Clone)]
pub struct ReconcilerError {
    pub kind: ErrorKind,
    pub cause: String,
    pub message: Option<String>,
}

impl ReconcilerError {
    pub fn new(
        kind: ErrorKind,
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn invalid_argument(
        argument: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::InvalidArgument, &format!("Missing argument {argument}"), message)
    }

    pub fn credential(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::CredentialFailure, cause, message)
    }

    pub fn registry_call(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::RegistryCallFailure, cause, message)
    }

    pub fn configuration(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Configuration, cause, message)
    }
}

impl std::error::Error for ReconcilerError {}

impl fmt::Display for ReconcilerError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} - Cause: {}", message, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}
