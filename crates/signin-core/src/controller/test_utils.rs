use std::sync::{Arc, Mutex};

use signin_api::Configuration;

use super::{FieldChange, SubmissionController};
use crate::{
    navigation::Router,
    notification::{Notifier, Severity},
    session::SessionStore,
    SigninSettings,
};

/// A side effect performed by the controller on one of its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetSession(String),
    Show(String, Severity),
    Hide,
    Replace(String),
}

/// Records effects across collaborators so their relative order can be asserted.
#[derive(Clone, Default)]
pub struct EffectLog(Arc<Mutex<Vec<Effect>>>);

impl EffectLog {
    fn push(&self, effect: Effect) {
        self.0.lock().unwrap().push(effect);
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.0.lock().unwrap().clone()
    }
}

pub struct RecordingSessionStore(EffectLog);

impl SessionStore for RecordingSessionStore {
    fn set_session(&self, token: String) {
        self.0.push(Effect::SetSession(token));
    }
}

pub struct RecordingNotifier(EffectLog);

impl Notifier for RecordingNotifier {
    fn show(&self, message: String, severity: Severity) {
        self.0.push(Effect::Show(message, severity));
    }

    fn hide(&self) {
        self.0.push(Effect::Hide);
    }
}

pub struct RecordingRouter(EffectLog);

impl Router for RecordingRouter {
    fn replace(&self, route: &str) {
        self.0.push(Effect::Replace(route.to_string()));
    }
}

pub type RecordingController =
    SubmissionController<RecordingSessionStore, RecordingNotifier, RecordingRouter>;

/// A controller whose collaborators all write to the returned log.
pub fn recording_controller(
    config: Configuration,
    redirect_delay_ms: u64,
) -> (RecordingController, EffectLog) {
    let log = EffectLog::default();
    let settings = SigninSettings {
        redirect_delay_ms,
        ..SigninSettings::default()
    };

    let controller = SubmissionController::new(
        config,
        &settings,
        Arc::new(RecordingSessionStore(log.clone())),
        Arc::new(RecordingNotifier(log.clone())),
        Arc::new(RecordingRouter(log.clone())),
    );

    (controller, log)
}

pub fn enter_valid_credentials(controller: &RecordingController) {
    controller.update(FieldChange::Username("alice".to_string()));
    controller.update(FieldChange::Password("hunter22".to_string()));
}
