//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from performing network requests.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Received error message from server: [{}] {}", .status, .message)]
    ResponseContent { status: StatusCode, message: String },

    #[error("Could not reach the server: {0}")]
    NotConnected(String),

    #[error("{0}")]
    Other(String),
}

impl From<autostop_api_base::Error> for ApiError {
    fn from(e: autostop_api_base::Error) -> Self {
        match e {
            autostop_api_base::Error::Response { status, content } => Self::ResponseContent {
                status,
                message: content,
            },
            autostop_api_base::Error::NotConnected(e) => Self::NotConnected(e),
            autostop_api_base::Error::Other(e) => Self::Other(e),
        }
    }
}

impl ApiError {
    /// The HTTP status code of the response, if the server produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::ResponseContent { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client is not authenticated or the session has expired.
#[derive(Debug, Error)]
#[error("The client is not authenticated or the session has expired")]
pub struct NotAuthenticatedError;

/// Missing required field.
#[derive(Debug, Error)]
#[error("The response received was missing a required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// This macro is used to require that a value is present or return an error otherwise.
/// It is equivalent to using `val.ok_or(Error::MissingFields)?`, but easier to use and
/// with a more descriptive error message.
/// Note that this macro will return early from the function if the value is not present.
#[macro_export]
macro_rules! require {
    ($val:expr) => {
        match $val {
            Some(val) => val,
            None => return Err($crate::MissingFieldError(stringify!($val)).into()),
        }
    };
}
