use async_trait::async_trait;
use dioxus::prelude::*;
use shared_types::{
    AuthError, AuthErrorKind, AuthForm, AuthRequest, AuthSettings, Credentials, FederatedProvider,
    Registration,
};
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::timer;

/// The identity backend the auth screen talks to.
///
/// Every call resolves to success or an [`AuthError`]; the screen maps any
/// failure to the generic banner for its path.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError>;
    async fn sign_up(&self, registration: &Registration) -> Result<(), AuthError>;
    async fn federated(&self, provider: FederatedProvider) -> Result<(), AuthError>;
}

/// Route a request to the matching backend call.
pub async fn dispatch(backend: &dyn AuthBackend, request: &AuthRequest) -> Result<(), AuthError> {
    match request {
        AuthRequest::SignIn(credentials) => backend.sign_in(credentials).await,
        AuthRequest::SignUp(registration) => backend.sign_up(registration).await,
        AuthRequest::Federated(provider) => backend.federated(*provider).await,
    }
}

/// Stand-in backend: waits a fixed delay, then answers.
///
/// Always succeeds unless built with [`SimulatedBackend::failing`].
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    fail_with: Option<AuthError>,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail_with: None,
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(settings.simulated_delay())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn failing(delay: Duration, error: AuthError) -> Self {
        Self {
            delay,
            fail_with: Some(error),
        }
    }

    async fn respond(&self) -> Result<(), AuthError> {
        timer::sleep(self.delay).await;
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl AuthBackend for SimulatedBackend {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        debug!(email = %credentials.email, "simulated sign-in");
        self.respond().await
    }

    async fn sign_up(&self, registration: &Registration) -> Result<(), AuthError> {
        debug!(email = %registration.email, "simulated sign-up");
        self.respond().await
    }

    async fn federated(&self, provider: FederatedProvider) -> Result<(), AuthError> {
        debug!(provider = provider.as_str(), "simulated federated sign-in");
        self.respond().await
    }
}

/// Context handle for the active backend.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<dyn AuthBackend>);

/// Hook to access the backend provided by `App`.
pub fn use_auth_backend() -> Rc<dyn AuthBackend> {
    use_context::<BackendHandle>().0
}

/// Somewhere the form state lives. Lets the submission flow run against a
/// component signal or a plain value.
pub trait FormStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut AuthForm) -> R) -> R;
}

impl FormStore for Signal<AuthForm> {
    fn update<R>(&mut self, f: impl FnOnce(&mut AuthForm) -> R) -> R {
        f(&mut *self.write())
    }
}

impl FormStore for AuthForm {
    fn update<R>(&mut self, f: impl FnOnce(&mut AuthForm) -> R) -> R {
        f(self)
    }
}

/// Which button started the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Email,
    Federated(FederatedProvider),
}

/// Run one submission attempt end to end.
///
/// `Idle -> Processing -> (Succeeded | Failed)`. The store is never borrowed
/// across the backend await, so the screen re-renders while the call runs.
/// `Ok(())` means the caller should schedule the redirect.
pub async fn submit<S: FormStore>(
    store: &mut S,
    backend: &dyn AuthBackend,
    submission: Submission,
) -> Result<(), AuthError> {
    let started = store.update(|form| match submission {
        Submission::Email => form.begin_email(),
        Submission::Federated(provider) => form.begin_federated(provider),
    });

    let request = match started {
        Ok(request) => request,
        Err(err) => {
            match err.kind {
                AuthErrorKind::InFlight => debug!("submission ignored, one is already in flight"),
                _ => info!(kind = %err.kind, "submission rejected before reaching the backend"),
            }
            return Err(err);
        }
    };

    info!(request = request.label(), "auth submission started");
    let outcome = dispatch(backend, &request).await;
    let result = store.update(|form| form.finish(&request, outcome));

    match &result {
        Ok(()) => info!(request = request.label(), "auth submission succeeded"),
        Err(err) => warn!(request = request.label(), error = %err, "auth submission failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AuthMode, SubmissionPhase, SUBMISSION_MESSAGE, VALIDATION_MESSAGE};
    use std::cell::{Cell, RefCell};

    const DELAY: Duration = Duration::from_millis(1000);

    impl FormStore for Rc<RefCell<AuthForm>> {
        fn update<R>(&mut self, f: impl FnOnce(&mut AuthForm) -> R) -> R {
            f(&mut *self.borrow_mut())
        }
    }

    /// Records what the form looked like while the call was in flight.
    struct RecordingBackend {
        form: Rc<RefCell<AuthForm>>,
        saw_processing: Cell<bool>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl AuthBackend for RecordingBackend {
        async fn sign_in(&self, _credentials: &Credentials) -> Result<(), AuthError> {
            self.calls.set(self.calls.get() + 1);
            self.saw_processing.set(self.form.borrow().is_processing);
            timer::sleep(DELAY).await;
            Ok(())
        }

        async fn sign_up(&self, _registration: &Registration) -> Result<(), AuthError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }

        async fn federated(&self, _provider: FederatedProvider) -> Result<(), AuthError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    fn login_form() -> AuthForm {
        AuthForm {
            email: "a@b.co".into(),
            password: "12345678".into(),
            ..AuthForm::new(AuthMode::Login)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_the_backend_then_succeeds() {
        let mut form = login_form();
        let backend = SimulatedBackend::new(DELAY);

        let start = tokio::time::Instant::now();
        submit(&mut form, &backend, Submission::Email).await.unwrap();

        assert!(start.elapsed() >= DELAY);
        assert!(!form.is_processing);
        assert_eq!(form.error, None);
        assert_eq!(
            form.success.as_deref(),
            Some("Login successfully! Redirecting...")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn processing_is_set_while_the_call_runs() {
        let store = Rc::new(RefCell::new(login_form()));
        let backend = RecordingBackend {
            form: store.clone(),
            saw_processing: Cell::new(false),
            calls: Cell::new(0),
        };

        let mut handle = store.clone();
        submit(&mut handle, &backend, Submission::Email).await.unwrap();

        assert!(backend.saw_processing.get());
        assert!(!store.borrow().is_processing);
        assert_eq!(store.borrow().phase(), SubmissionPhase::Succeeded);
    }

    #[tokio::test]
    async fn invalid_form_never_calls_the_backend() {
        let mut form = AuthForm {
            email: "a@b.co".into(),
            password: "12345678".into(),
            confirm_password: "12345678".into(),
            ..AuthForm::new(AuthMode::SignUp)
        };
        let backend = RecordingBackend {
            form: Rc::new(RefCell::new(AuthForm::default())),
            saw_processing: Cell::new(false),
            calls: Cell::new(0),
        };

        let err = submit(&mut form, &backend, Submission::Email).await.unwrap_err();

        assert_eq!(err.kind, AuthErrorKind::ValidationError);
        assert_eq!(backend.calls.get(), 0);
        assert!(!form.is_processing);
        assert_eq!(form.error.as_deref(), Some(VALIDATION_MESSAGE));
        assert_eq!(form.email, "a@b.co");
    }

    #[tokio::test(start_paused = true)]
    async fn injected_failure_sets_error_not_success() {
        let mut form = login_form();
        let backend =
            SimulatedBackend::failing(DELAY, AuthError::submission().with_message("503"));

        let err = submit(&mut form, &backend, Submission::Email).await.unwrap_err();

        assert_eq!(err.message, "503");
        assert!(!form.is_processing);
        assert_eq!(form.success, None);
        assert_eq!(form.error.as_deref(), Some(SUBMISSION_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn federated_path_skips_validation() {
        let mut form = AuthForm::new(AuthMode::SignUp);
        let backend = SimulatedBackend::new(DELAY);

        submit(&mut form, &backend, Submission::Federated(FederatedProvider::Google))
            .await
            .unwrap();

        assert_eq!(
            form.success.as_deref(),
            Some("Google sign in successful! Redirecting...")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_submit_is_rejected_while_in_flight() {
        let store = Rc::new(RefCell::new(login_form()));
        let backend = RecordingBackend {
            form: store.clone(),
            saw_processing: Cell::new(false),
            calls: Cell::new(0),
        };

        let mut first = store.clone();
        let mut second = store.clone();
        let (a, b) = tokio::join!(
            submit(&mut first, &backend, Submission::Email),
            submit(&mut second, &backend, Submission::Federated(FederatedProvider::Google)),
        );

        assert!(a.is_ok());
        assert_eq!(b.unwrap_err().kind, AuthErrorKind::InFlight);
        assert_eq!(backend.calls.get(), 1);
        assert_eq!(
            store.borrow().success.as_deref(),
            Some("Login successfully! Redirecting...")
        );
    }

    #[tokio::test]
    async fn dispatch_routes_by_request() {
        let backend = RecordingBackend {
            form: Rc::new(RefCell::new(AuthForm::default())),
            saw_processing: Cell::new(false),
            calls: Cell::new(0),
        };
        dispatch(&backend, &AuthRequest::Federated(FederatedProvider::Google))
            .await
            .unwrap();
        assert_eq!(backend.calls.get(), 1);
    }
}
