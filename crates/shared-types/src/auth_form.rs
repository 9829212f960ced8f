use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::requests::{AuthRequest, Credentials, FederatedProvider, Registration};
use crate::validation::{marks_invalid, FieldValidity};

/// Which form the auth screen is showing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }

    pub fn is_sign_up(self) -> bool {
        self == AuthMode::SignUp
    }

    /// Parse a `mode` query value, falling back to Login.
    pub fn from_key(s: &str) -> Self {
        match s {
            "signup" | "sign-up" | "register" => AuthMode::SignUp,
            _ => AuthMode::Login,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::SignUp => "signup",
        }
    }

    /// Label of the email submit button.
    pub fn submit_label(self, processing: bool) -> &'static str {
        match (self, processing) {
            (AuthMode::Login, true) => "Logging in...",
            (AuthMode::SignUp, true) => "Signing up...",
            (AuthMode::Login, false) => "Login with Email",
            (AuthMode::SignUp, false) => "Sign up with Email",
        }
    }

    /// Label of the federated sign-in button.
    pub fn federated_label(self, provider: FederatedProvider, processing: bool) -> String {
        if processing {
            return "Please wait...".to_string();
        }
        let verb = match self {
            AuthMode::Login => "Login",
            AuthMode::SignUp => "Sign up",
        };
        format!("{verb} with {}", provider.display_name())
    }

    /// Prompt and link text of the mode toggle.
    pub fn toggle_text(self) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => ("Don't have an account?", "Sign up"),
            AuthMode::SignUp => ("Already have an account?", "Log in"),
        }
    }
}

/// Where a submission stands, derived from the form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Processing,
    Succeeded,
    Failed,
}

/// In-memory state of the auth screen.
///
/// Lives as long as the mounted screen. `error` and `success` are never both
/// set, and at most one submission is in flight at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub is_processing: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn validity(&self) -> FieldValidity {
        FieldValidity::check(&self.name, &self.email, &self.password, &self.confirm_password)
    }

    /// Login needs email and password; sign-up also needs a name and a
    /// matching confirmation.
    pub fn is_valid(&self) -> bool {
        let v = self.validity();
        match self.mode {
            AuthMode::Login => v.credentials_ok(),
            AuthMode::SignUp => v.registration_ok(),
        }
    }

    pub fn email_marked_invalid(&self) -> bool {
        marks_invalid(&self.email, self.validity().email)
    }

    pub fn password_marked_invalid(&self) -> bool {
        marks_invalid(&self.password, self.validity().password)
    }

    pub fn confirm_marked_invalid(&self) -> bool {
        marks_invalid(&self.confirm_password, self.validity().confirm)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_processing && self.is_valid()
    }

    pub fn can_use_federated(&self) -> bool {
        !self.is_processing
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.is_processing {
            SubmissionPhase::Processing
        } else if self.success.is_some() {
            SubmissionPhase::Succeeded
        } else if self.error.is_some() {
            SubmissionPhase::Failed
        } else {
            SubmissionPhase::Idle
        }
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    /// Flip between Login and SignUp.
    ///
    /// Password fields and banners are cleared; email and name carry over.
    /// Ignored while a submission is in flight. Returns whether the mode changed.
    pub fn toggle_mode(&mut self) -> bool {
        if self.is_processing {
            return false;
        }
        self.mode = self.mode.toggled();
        self.password.clear();
        self.confirm_password.clear();
        self.clear_messages();
        true
    }

    /// Start an email submission.
    ///
    /// Rejects without touching state if one is already in flight. An invalid
    /// form sets the validation banner and leaves the fields alone.
    pub fn begin_email(&mut self) -> Result<AuthRequest, AuthError> {
        if self.is_processing {
            return Err(AuthError::in_flight());
        }
        self.clear_messages();

        if !self.is_valid() {
            let err = AuthError::validation();
            self.error = Some(err.message.clone());
            return Err(err);
        }

        let request = match self.mode {
            AuthMode::Login => AuthRequest::SignIn(Credentials {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::SignUp => AuthRequest::SignUp(Registration {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                confirm_password: self.confirm_password.clone(),
            }),
        };
        self.is_processing = true;
        Ok(request)
    }

    /// Start a federated sign-in. No local fields are checked.
    pub fn begin_federated(
        &mut self,
        provider: FederatedProvider,
    ) -> Result<AuthRequest, AuthError> {
        if self.is_processing {
            return Err(AuthError::in_flight());
        }
        self.clear_messages();
        self.is_processing = true;
        Ok(AuthRequest::Federated(provider))
    }

    /// Record the outcome of an in-flight request.
    ///
    /// Always clears `is_processing`. On failure the banner shows the
    /// path's generic message; the returned error keeps the backend detail.
    pub fn finish(
        &mut self,
        request: &AuthRequest,
        outcome: Result<(), AuthError>,
    ) -> Result<(), AuthError> {
        self.is_processing = false;
        self.clear_messages();
        match outcome {
            Ok(()) => {
                self.success = Some(request.success_message());
                Ok(())
            }
            Err(err) => {
                self.error = Some(request.failure().message);
                Err(err)
            }
        }
    }
}
