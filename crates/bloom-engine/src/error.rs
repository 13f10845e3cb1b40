//! Error types for the Bloom membership engine

use thiserror::Error;

/// Errors raised by the filter engine and its snapshot codecs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    /// Bad construction parameters (capacity or target error rate)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-text item or malformed snapshot
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FilterError {
    /// Message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            FilterError::InvalidArgument(msg)
            | FilterError::InvalidInput(msg)
            | FilterError::Serialization(msg) => msg,
        }
    }
}

/// Errors raised by the request layer before or while calling the engine
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Item is required")]
    MissingItem,

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Outcome class of a handled request, independent of the transport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyStatus {
    Ok,
    ClientError,
    NotFound,
    ServerError,
}

impl ReplyStatus {
    /// HTTP status code a web front end should answer with
    pub fn http_code(self) -> u16 {
        match self {
            ReplyStatus::Ok => 200,
            ReplyStatus::ClientError => 400,
            ReplyStatus::NotFound => 404,
            ReplyStatus::ServerError => 500,
        }
    }
}

impl RequestError {
    /// Validation failures are the caller's fault; engine failures are not.
    pub fn status(&self) -> ReplyStatus {
        match self {
            RequestError::MissingItem => ReplyStatus::ClientError,
            RequestError::UnknownRoute(_) => ReplyStatus::NotFound,
            RequestError::Filter(_) => ReplyStatus::ServerError,
        }
    }

    /// Failure text reported next to a server error
    pub fn details(&self) -> String {
        match self {
            RequestError::Filter(e) => e.message().to_string(),
            other => other.to_string(),
        }
    }
}
