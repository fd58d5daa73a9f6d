use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use validator::Validate;

use super::Credentials;

/// The fields of the sign-in form.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    #[allow(missing_docs)]
    Username,
    #[allow(missing_docs)]
    Password,
    #[allow(missing_docs)]
    RememberMe,
}

impl FieldName {
    /// All form fields, in display order.
    pub const ALL: [FieldName; 3] = [
        FieldName::Username,
        FieldName::Password,
        FieldName::RememberMe,
    ];
}

/// A rule violated by a single field.
#[derive(Serialize, Debug, Error, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldError {
    /// The username is empty or contains something other than lowercase ASCII letters.
    #[error(
        "Username cannot contain spaces or specific symbols like numbers, spaces or special \
         characters."
    )]
    InvalidFormat,
    /// The password has fewer than 6 characters.
    #[error("Password must be at least 6 characters.")]
    TooShort,
}

/// Validity of one field, with the message to display next to it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// Whether the field currently satisfies its rule
    pub valid: bool,
    /// The violated rule, if any
    pub error: Option<FieldError>,
    /// Human-readable message for `error`
    pub message: Option<String>,
}

impl FieldState {
    fn valid() -> Self {
        Self {
            valid: true,
            error: None,
            message: None,
        }
    }

    fn invalid(error: FieldError) -> Self {
        Self {
            valid: false,
            error: Some(error),
            message: Some(error.to_string()),
        }
    }
}

/// Per-field validity of a [Credentials] snapshot. Every field of [FieldName::ALL] is present.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationState {
    fields: BTreeMap<FieldName, FieldState>,
}

impl ValidationState {
    fn all_valid() -> Self {
        Self {
            fields: FieldName::ALL
                .into_iter()
                .map(|name| (name, FieldState::valid()))
                .collect(),
        }
    }

    /// True when every field is valid, i.e. the submit action may be enabled.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|state| state.valid)
    }

    /// The state of a single field.
    pub fn field(&self, name: FieldName) -> &FieldState {
        // Populated for every name at construction.
        &self.fields[&name]
    }

    /// The message to display next to `name`, if it is invalid.
    pub fn message(&self, name: FieldName) -> Option<&str> {
        self.field(name).message.as_deref()
    }

    /// The violated rules, in field order.
    pub fn errors(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        self.fields
            .iter()
            .filter_map(|(name, state)| state.error.map(|error| (*name, error)))
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::all_valid()
    }
}

/// Evaluates the form rules. Pure and synchronous, so it can run on every keystroke.
pub struct FieldValidator;

impl FieldValidator {
    /// Produces the validation state of `credentials`.
    pub fn validate(credentials: &Credentials) -> ValidationState {
        let mut state = ValidationState::all_valid();

        let Err(errors) = credentials.validate() else {
            return state;
        };

        for (field, _) in errors.field_errors() {
            let (name, error) = match &*field {
                "username" => (FieldName::Username, FieldError::InvalidFormat),
                "password" => (FieldName::Password, FieldError::TooShort),
                other => {
                    tracing::warn!(field = other, "Validation error on unknown field");
                    continue;
                }
            };
            state.fields.insert(name, FieldState::invalid(error));
        }

        state
    }
}
