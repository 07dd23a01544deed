use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("The user has not logged in")]
pub struct NotLoggedInError;

/// A response from the API that was not a success
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("request failed with status code: {status} and message: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 401 means the whole session is no longer accepted, not only this call
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }
}
