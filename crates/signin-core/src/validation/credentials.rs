use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use signin_api::LoginApiRequest;
use validator::Validate;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("username pattern is a valid regex"));

/// The values currently entered in the sign-in form.
///
/// Only ever held in memory for the lifetime of the form; the password is redacted from `Debug`
/// output.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    /// Lowercase ASCII letters only, at least one
    #[validate(regex(path = *USERNAME_PATTERN))]
    pub username: String,
    /// At least 6 characters
    #[validate(length(min = 6))]
    pub password: String,
    /// Optional, always valid
    pub remember_me: bool,
}

impl Credentials {
    /// Applies a single field change reported by the form surface.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Username(username) => self.username = username,
            FieldChange::Password(password) => self.password = password,
            FieldChange::RememberMe(remember_me) => self.remember_me = remember_me,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl From<&Credentials> for LoginApiRequest {
    fn from(credentials: &Credentials) -> Self {
        LoginApiRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            remember_me: credentials.remember_me,
        }
    }
}

/// A value change on one of the form fields.
#[derive(Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// New content of the username field
    Username(String),
    /// New content of the password field
    Password(String),
    /// New state of the remember-me checkbox
    RememberMe(bool),
}

impl fmt::Debug for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldChange::Username(username) => f.debug_tuple("Username").field(username).finish(),
            FieldChange::Password(_) => f.debug_tuple("Password").field(&"<redacted>").finish(),
            FieldChange::RememberMe(value) => f.debug_tuple("RememberMe").field(value).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let credentials = Credentials::default();
        assert_eq!(credentials.username, "");
        assert_eq!(credentials.password, "");
        assert!(!credentials.remember_me);
    }

    #[test]
    fn apply_updates_one_field() {
        let mut credentials = Credentials::default();
        credentials.apply(FieldChange::Username("alice".to_string()));
        credentials.apply(FieldChange::RememberMe(true));

        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "");
        assert!(credentials.remember_me);
    }

    #[test]
    fn debug_never_shows_password() {
        let credentials = Credentials {
            username: "alice".to_string(),
            password: "hunter22".to_string(),
            remember_me: false,
        };

        assert!(!format!("{credentials:?}").contains("hunter22"));
        let change = FieldChange::Password("hunter22".to_string());
        assert!(!format!("{change:?}").contains("hunter22"));
    }

    #[test]
    fn converts_to_api_request() {
        let credentials = Credentials {
            username: "alice".to_string(),
            password: "hunter22".to_string(),
            remember_me: true,
        };

        let request = LoginApiRequest::from(&credentials);

        assert_eq!(request.username, "alice");
        assert_eq!(request.password, "hunter22");
        assert!(request.remember_me);
    }

    #[test]
    fn deserializes_partial_form_values() {
        let credentials: Credentials =
            serde_json::from_str(r#"{ "username": "bob", "rememberMe": true }"#).unwrap();

        assert_eq!(credentials.username, "bob");
        assert_eq!(credentials.password, "");
        assert!(credentials.remember_me);
    }
}
