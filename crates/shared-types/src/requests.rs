use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AuthError;

/// Email sign-in payload.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Email sign-up payload.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// Passwords never reach log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// External identity providers offered on the auth screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FederatedProvider {
    #[default]
    Google,
}

impl FederatedProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            FederatedProvider::Google => "google",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FederatedProvider::Google => "Google",
        }
    }
}

/// A submission accepted by the form state holder, ready for a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn(Credentials),
    SignUp(Registration),
    Federated(FederatedProvider),
}

impl AuthRequest {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            AuthRequest::SignIn(_) => "sign_in",
            AuthRequest::SignUp(_) => "sign_up",
            AuthRequest::Federated(_) => "federated",
        }
    }

    /// Success banner text.
    pub fn success_message(&self) -> String {
        match self {
            AuthRequest::SignIn(_) => "Login successfully! Redirecting...".to_string(),
            AuthRequest::SignUp(_) => "Account created successfully! Redirecting...".to_string(),
            AuthRequest::Federated(provider) => {
                format!("{} sign in successful! Redirecting...", provider.display_name())
            }
        }
    }

    /// The error surfaced when this request fails, whatever the backend said.
    pub fn failure(&self) -> AuthError {
        match self {
            AuthRequest::SignIn(_) | AuthRequest::SignUp(_) => AuthError::submission(),
            AuthRequest::Federated(_) => AuthError::federated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthErrorKind;

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.co".into(),
            password: "hunter22hunter".into(),
        }
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let out = format!("{:?}", credentials());
        assert!(out.contains("a@b.co"));
        assert!(!out.contains("hunter22hunter"));

        let reg = Registration {
            name: "Ada".into(),
            email: "a@b.co".into(),
            password: "hunter22hunter".into(),
            confirm_password: "hunter22hunter".into(),
        };
        let out = format!("{:?}", AuthRequest::SignUp(reg));
        assert!(out.contains("Ada"));
        assert!(!out.contains("hunter22hunter"));
    }

    #[test]
    fn success_messages_by_request() {
        assert_eq!(
            AuthRequest::SignIn(credentials()).success_message(),
            "Login successfully! Redirecting..."
        );
        assert_eq!(
            AuthRequest::Federated(FederatedProvider::Google).success_message(),
            "Google sign in successful! Redirecting..."
        );
    }

    #[test]
    fn failure_kind_follows_path() {
        assert_eq!(
            AuthRequest::SignIn(credentials()).failure().kind,
            AuthErrorKind::SubmissionError
        );
        assert_eq!(
            AuthRequest::Federated(FederatedProvider::Google).failure().kind,
            AuthErrorKind::FederatedAuthError
        );
    }

    #[test]
    fn provider_serializes_lowercase() {
        let json = serde_json::to_string(&FederatedProvider::Google).unwrap();
        assert_eq!(json, r#""google""#);
        assert_eq!(FederatedProvider::Google.as_str(), "google");
    }
}
