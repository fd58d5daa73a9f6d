//! Local validation of the sign-in form.
//!
//! Rules are declared on [Credentials] and evaluated by [FieldValidator], which turns them into a
//! per-field [ValidationState] the form surface can render and use to gate the submit action.

mod credentials;
mod field_validator;

pub use credentials::{Credentials, FieldChange};
pub use field_validator::{FieldError, FieldName, FieldState, FieldValidator, ValidationState};
