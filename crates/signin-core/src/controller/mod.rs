//! The submission state machine.

mod phase;
mod submission_controller;
#[cfg(test)]
mod test_utils;

pub use phase::SubmissionPhase;
pub use submission_controller::{SubmissionController, SubmitResult};

pub use crate::validation::FieldChange;
