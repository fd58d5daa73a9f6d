use serde::Serialize;

/// Where the controller is in the current submission attempt.
///
/// `Idle → Validating → Submitting → Succeeded | Failed`, and back to `Idle` on the next field
/// edit or submit. A blocked submission goes from `Validating` straight back to `Idle`.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionPhase {
    /// Waiting for input
    #[default]
    Idle,
    /// Checking the credentials before sending them
    Validating,
    /// Waiting for the login endpoint
    Submitting,
    /// Logged in; a redirect is scheduled
    Succeeded,
    /// The attempt failed; the user has to submit again
    Failed,
}

impl SubmissionPhase {
    /// True for the phases ending an attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
    }
}
