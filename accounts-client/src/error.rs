use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes returned by the accounts service.
///
/// The set of codes the service emits is part of its contract, so they
/// are matched into a closed enum here. Codes this client does not know
/// about yet are kept verbatim in `Other` instead of being lumped into
/// a catch-all message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountErrorKind {
    AccountAlreadyExists,
    ServerBusy,
    Throttled,
    UserCanceledLogin,
    InvalidParameter,
    UnexpectedError,
    Other(String),
}

impl AccountErrorKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ACCOUNT_ALREADY_EXISTS" => Self::AccountAlreadyExists,
            "SERVER_BUSY" => Self::ServerBusy,
            "THROTTLED" => Self::Throttled,
            "USER_CANCELED_LOGIN" => Self::UserCanceledLogin,
            "INVALID_PARAMETER" => Self::InvalidParameter,
            "UNEXPECTED_ERROR" => Self::UnexpectedError,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            Self::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            Self::ServerBusy => "SERVER_BUSY",
            Self::Throttled => "THROTTLED",
            Self::UserCanceledLogin => "USER_CANCELED_LOGIN",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::UnexpectedError => "UNEXPECTED_ERROR",
            Self::Other(code) => code,
        }
    }
}

impl std::fmt::Display for AccountErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// An error from the accounts service, classified by kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("account error {kind}: {message}")]
pub struct AccountError {
    pub kind: AccountErrorKind,
    pub message: String,
    pub http_status: Option<u16>,
}

impl AccountError {
    pub fn new(kind: AccountErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Transport-level failures that never reached the service.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(AccountErrorKind::UnexpectedError, message)
    }
}

impl From<reqwest::Error> for AccountError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            kind: AccountErrorKind::UnexpectedError,
            message: error.to_string(),
            http_status: error.status().map(|s| s.as_u16()),
        }
    }
}

/// Body of a non-success response: `{"error": CODE, "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn into_account_error(self, http_status: u16) -> AccountError {
        AccountError {
            kind: AccountErrorKind::from_code(&self.error),
            message: self.message,
            http_status: Some(http_status),
        }
    }
}
