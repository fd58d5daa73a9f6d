use std::sync::{Arc, Mutex, RwLock};

use signin_api::{send_login_request, Configuration, LoginApiRequest};
use tokio::sync::watch;

use super::{FieldChange, SubmissionPhase};
use crate::{
    navigation::{Navigator, PendingRedirect, Router},
    notification::Notifier,
    outcome::{classify, LoginOutcome},
    session::SessionStore,
    validation::{Credentials, FieldValidator, ValidationState},
    SigninSettings,
};

/// What a call to [SubmissionController::submit] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Local validation failed; nothing was sent.
    Blocked(ValidationState),
    /// The request was attempted and its outcome dispatched.
    Completed(LoginOutcome),
}

struct FormState {
    credentials: Credentials,
    validation: ValidationState,
}

/// Drives a sign-in form from field edits to the authenticated area.
///
/// # Lifecycle
///
/// 1. Report every field edit with [SubmissionController::update]; the returned
///    [ValidationState] gates the submit action.
/// 2. Call [SubmissionController::submit]. Valid credentials are posted to the login endpoint,
///    the returned token is stored, the outcome is notified and, on success, a redirect is
///    scheduled.
///
/// No error escapes `submit`: every failure ends as a notification. The controller does not
/// prevent concurrent submissions; each one issues its own request.
pub struct SubmissionController<Ses, Not, Rou>
where
    Ses: SessionStore,
    Not: Notifier,
    Rou: Router,
{
    config: Configuration,
    navigator: Navigator,

    session: Arc<Ses>,
    notifier: Arc<Not>,
    router: Arc<Rou>,

    form: RwLock<FormState>,
    phase: watch::Sender<SubmissionPhase>,
    pending_redirect: Mutex<Option<PendingRedirect>>,
}

impl<Ses, Not, Rou> SubmissionController<Ses, Not, Rou>
where
    Ses: SessionStore,
    Not: Notifier,
    Rou: Router,
{
    /// Creates a controller for an empty form.
    pub fn new(
        config: Configuration,
        settings: &SigninSettings,
        session: Arc<Ses>,
        notifier: Arc<Not>,
        router: Arc<Rou>,
    ) -> Self {
        let credentials = Credentials::default();
        let validation = FieldValidator::validate(&credentials);
        let (phase, _) = watch::channel(SubmissionPhase::Idle);

        Self {
            config,
            navigator: settings.navigator(),
            session,
            notifier,
            router,
            form: RwLock::new(FormState {
                credentials,
                validation,
            }),
            phase,
            pending_redirect: Mutex::new(None),
        }
    }

    /// A snapshot of the entered credentials.
    pub fn credentials(&self) -> Credentials {
        self.form
            .read()
            .expect("RwLock is not poisoned")
            .credentials
            .clone()
    }

    /// The validation state of the entered credentials.
    pub fn validation_state(&self) -> ValidationState {
        self.form
            .read()
            .expect("RwLock is not poisoned")
            .validation
            .clone()
    }

    /// Whether every field is valid, i.e. the submit action may be enabled.
    pub fn can_submit(&self) -> bool {
        self.form
            .read()
            .expect("RwLock is not poisoned")
            .validation
            .is_valid()
    }

    /// The current phase of the state machine.
    pub fn phase(&self) -> SubmissionPhase {
        *self.phase.borrow()
    }

    /// Receives every subsequent phase change.
    pub fn subscribe_phase(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase.subscribe()
    }

    /// Applies a field edit and re-validates the form. Ends a finished attempt.
    pub fn update(&self, change: FieldChange) -> ValidationState {
        let validation = {
            let mut form = self.form.write().expect("RwLock is not poisoned");
            form.credentials.apply(change);
            form.validation = FieldValidator::validate(&form.credentials);
            form.validation.clone()
        };

        self.phase.send_if_modified(|phase| {
            if phase.is_terminal() {
                *phase = SubmissionPhase::Idle;
                true
            } else {
                false
            }
        });

        validation
    }

    /// Cancels the redirect scheduled by an earlier successful attempt, if it has not happened
    /// yet. Returns whether a redirect was cancelled.
    pub fn cancel_pending_redirect(&self) -> bool {
        let pending = self
            .pending_redirect
            .lock()
            .expect("Mutex is not poisoned")
            .take();

        match pending {
            Some(pending) if !pending.is_finished() => {
                pending.cancel();
                true
            }
            _ => false,
        }
    }

    /// Hands over the redirect scheduled by the last successful attempt, e.g. to await it.
    pub fn take_pending_redirect(&self) -> Option<PendingRedirect> {
        self.pending_redirect
            .lock()
            .expect("Mutex is not poisoned")
            .take()
    }

    /// Validates the entered credentials and, if they are valid, submits them.
    ///
    /// A redirect still pending from an earlier attempt is cancelled once the credentials are
    /// sent. A blocked submission leaves it running.
    pub async fn submit(&self) -> SubmitResult {
        self.set_phase(SubmissionPhase::Validating);

        let (credentials, validation) = {
            let mut form = self.form.write().expect("RwLock is not poisoned");
            form.validation = FieldValidator::validate(&form.credentials);
            (form.credentials.clone(), form.validation.clone())
        };

        if !validation.is_valid() {
            let errors: Vec<_> = validation.errors().collect();
            tracing::debug!(?errors, "Submission blocked by validation");
            self.set_phase(SubmissionPhase::Idle);
            return SubmitResult::Blocked(validation);
        }

        self.set_phase(SubmissionPhase::Submitting);

        if self.cancel_pending_redirect() {
            tracing::debug!("Cancelled redirect pending from a previous attempt");
        }

        let request = LoginApiRequest::from(&credentials);
        let outcome = match send_login_request(&self.config, &request).await {
            Ok(response) => {
                // Stored before interpreting the response, even for failed logins.
                if let Some(token) = response.data.token.clone() {
                    self.session.set_session(token);
                }
                classify(&response)
            }
            Err(e) => {
                tracing::error!("Error during login: {e}");
                LoginOutcome::from(&e)
            }
        };

        self.dispatch(&outcome);

        SubmitResult::Completed(outcome)
    }

    fn dispatch(&self, outcome: &LoginOutcome) {
        self.notifier
            .show(outcome.message().to_string(), outcome.severity());

        if outcome.redirects() {
            self.set_phase(SubmissionPhase::Succeeded);

            let pending = self
                .navigator
                .schedule(self.router.clone(), self.notifier.clone());
            let previous = self
                .pending_redirect
                .lock()
                .expect("Mutex is not poisoned")
                .replace(pending);
            // Only the latest successful attempt redirects.
            if let Some(previous) = previous {
                previous.cancel();
            }
        } else {
            self.set_phase(SubmissionPhase::Failed);
        }

        tracing::info!(?outcome, "Login attempt completed");
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        tracing::debug!(?phase, "Submission phase changed");
        self.phase.send_replace(phase);
    }
}
