//! Error types for the follow-up extension.
//!
//! Every failure in the activation flow is converted into an [`Error`] and
//! surfaced through the button's error display state; nothing propagates to
//! the host uncaught. [`Error::user_message`] produces the string shown in
//! the error panel.

use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

/// Generic message displayed when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to create follow-up task";

/// Errors surfaced by the follow-up button and its host boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The host returned no current-user identity at submission time.
    ///
    /// This aborts the activation before any task is built; the action is
    /// fully recoverable via retry once the host supplies an identity.
    #[error("Unable to get current user")]
    MissingUser,

    /// The task-creation collaborator rejected or failed the request.
    ///
    /// Carries the collaborator's message verbatim (network error,
    /// validation failure, host-side rejection).
    #[error("{0}")]
    TaskCreation(String),

    /// A host-boundary input was malformed (bad props, duplicate
    /// registration, unparseable record payload).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested extension point is not registered.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An unexpected internal failure with no user-meaningful message.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a task-creation error carrying the collaborator's message.
    pub fn task_creation(message: impl Into<String>) -> Self {
        Self::TaskCreation(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The human-readable message shown in the error panel.
    ///
    /// Prefers the failure's own message; failures that carry none (or
    /// whose message is developer-facing) fall back to
    /// [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingUser => self.to_string(),
            Self::TaskCreation(message) if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_message() {
        let err = Error::MissingUser;
        assert_eq!(err.user_message(), "Unable to get current user");
    }

    #[test]
    fn test_task_creation_message_verbatim() {
        let err = Error::task_creation("quota exceeded");
        assert_eq!(err.user_message(), "quota exceeded");
    }

    #[test]
    fn test_empty_task_creation_message_falls_back() {
        let err = Error::task_creation("");
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_internal_errors_show_generic_message() {
        let err = Error::internal("mutex poisoned");
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
