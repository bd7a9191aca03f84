use crate::domain::session::RejectionReason;
use thiserror::Error;

/// Failures of the single create-session call, whatever the transport reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("request timed out")]
    Timeout,
    #[error("HTTP error ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("connection error: {0}")]
    Connection(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    #[error("request could not be built: {0}")]
    Build(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_builder() {
            NetworkError::Build(err.to_string())
        } else if err.is_decode() {
            NetworkError::MalformedBody(err.to_string())
        } else if let Some(status) = err.status() {
            NetworkError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            NetworkError::Connection(err.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("rejected by provider{}", .reason.as_ref().map(|r| format!(": {r}")).unwrap_or_default())]
    RejectedByProvider { reason: Option<RejectionReason> },
    #[error("unknown session status: {}", .0.as_deref().unwrap_or("<missing>"))]
    UnknownStatus(Option<String>),
    #[error("checkout closed before completion")]
    CheckoutAbandoned,
    #[error("checkout session expired")]
    CheckoutExpired,
    #[error("invalid order id: {0}")]
    InvalidOrderId(String),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
