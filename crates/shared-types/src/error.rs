use serde::{Deserialize, Serialize};
use std::fmt;

/// Banner text for a form that fails local validation.
pub const VALIDATION_MESSAGE: &str = "Please fill all fields correctly.";
/// Banner text for a failed email sign-in or sign-up.
pub const SUBMISSION_MESSAGE: &str = "Something went wrong. Please try again.";
/// Banner text for a failed federated sign-in.
pub const FEDERATED_MESSAGE: &str = "Google sign in failed. Try again.";
const IN_FLIGHT_MESSAGE: &str = "A submission is already in progress.";

/// Categorization of authentication errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Detected locally; never reaches a backend.
    ValidationError,
    /// Backend or network failure on the email path.
    SubmissionError,
    /// Failure of the federated credential exchange.
    FederatedAuthError,
    /// Another submission is still running for this form.
    InFlight,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthErrorKind::ValidationError => write!(f, "ValidationError"),
            AuthErrorKind::SubmissionError => write!(f, "SubmissionError"),
            AuthErrorKind::FederatedAuthError => write!(f, "FederatedAuthError"),
            AuthErrorKind::InFlight => write!(f, "InFlight"),
        }
    }
}

impl AuthErrorKind {
    /// The generic client-visible text for this kind.
    pub fn default_message(&self) -> &'static str {
        match self {
            AuthErrorKind::ValidationError => VALIDATION_MESSAGE,
            AuthErrorKind::SubmissionError => SUBMISSION_MESSAGE,
            AuthErrorKind::FederatedAuthError => FEDERATED_MESSAGE,
            AuthErrorKind::InFlight => IN_FLIGHT_MESSAGE,
        }
    }
}

/// Structured error shared by the form state holder and any backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    fn of(kind: AuthErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    pub fn validation() -> Self {
        Self::of(AuthErrorKind::ValidationError)
    }

    pub fn submission() -> Self {
        Self::of(AuthErrorKind::SubmissionError)
    }

    pub fn federated() -> Self {
        Self::of(AuthErrorKind::FederatedAuthError)
    }

    pub fn in_flight() -> Self {
        Self::of(AuthErrorKind::InFlight)
    }

    /// Replace the message with backend-supplied detail.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_generic_messages() {
        assert_eq!(AuthError::validation().message, "Please fill all fields correctly.");
        assert_eq!(
            AuthError::submission().message,
            "Something went wrong. Please try again."
        );
        assert_eq!(AuthError::federated().message, "Google sign in failed. Try again.");
    }

    #[test]
    fn with_message_keeps_kind() {
        let err = AuthError::federated().with_message("popup closed");
        assert_eq!(err.kind, AuthErrorKind::FederatedAuthError);
        assert_eq!(err.message, "popup closed");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AuthError::validation();
        assert_eq!(
            format!("{}", err),
            "ValidationError: Please fill all fields correctly."
        );
    }
}
