//! Interpretation of login responses.
//!
//! [classify] is pure: it only maps a response to a [LoginOutcome]. Side effects driven by the
//! outcome (notification, redirect) are dispatched by the controller.

use signin_api::LoginApiResponse;

use crate::notification::Severity;

/// Message shown after a 2xx response without an `Info` status.
pub const LOGIN_SUCCESSFUL_MESSAGE: &str = "Login successful!";
/// Fallback message for a failed response without a status.
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Incorrect credentials";
/// Message shown when no interpretable response was received.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

const STATUS_INFO: &str = "Info";
const STATUS_ERROR: &str = "Error";

/// The result of a login attempt that reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 2xx response with any status other than `Info`.
    Success,
    /// 2xx response with status `Info`.
    Info {
        /// The status text
        message: String,
    },
    /// Non-2xx response with status `Error`.
    ApplicationError {
        /// The status text
        message: String,
    },
    /// Non-2xx response with any other status, or none.
    CredentialError {
        /// The status text, or [INCORRECT_CREDENTIALS_MESSAGE]
        message: String,
    },
    /// The server could not be reached or its response could not be parsed.
    TransportError {
        /// Diagnostic description of the failure, not meant for display
        reason: String,
    },
}

/// Maps a parsed login response to its outcome.
///
/// Transport success decides first; the `Error` status on a failed response downgrades the
/// outcome to an application error instead of a credential error.
pub fn classify(response: &LoginApiResponse) -> LoginOutcome {
    let status = response.data.status.as_deref();

    if !response.ok {
        return match status {
            Some(STATUS_ERROR) => LoginOutcome::ApplicationError {
                message: STATUS_ERROR.to_string(),
            },
            Some(status) if !status.is_empty() => LoginOutcome::CredentialError {
                message: status.to_string(),
            },
            _ => LoginOutcome::CredentialError {
                message: INCORRECT_CREDENTIALS_MESSAGE.to_string(),
            },
        };
    }

    match status {
        Some(STATUS_INFO) => LoginOutcome::Info {
            message: STATUS_INFO.to_string(),
        },
        _ => LoginOutcome::Success,
    }
}

impl From<&signin_api::Error> for LoginOutcome {
    fn from(error: &signin_api::Error) -> Self {
        LoginOutcome::TransportError {
            reason: error.to_string(),
        }
    }
}

impl LoginOutcome {
    /// Severity of the notification reporting this outcome.
    pub fn severity(&self) -> Severity {
        match self {
            LoginOutcome::Success => Severity::Success,
            LoginOutcome::Info { .. } => Severity::Info,
            LoginOutcome::ApplicationError { .. } => Severity::Warning,
            LoginOutcome::CredentialError { .. } | LoginOutcome::TransportError { .. } => {
                Severity::Error
            }
        }
    }

    /// Text of the notification reporting this outcome.
    pub fn message(&self) -> &str {
        match self {
            LoginOutcome::Success => LOGIN_SUCCESSFUL_MESSAGE,
            LoginOutcome::Info { message }
            | LoginOutcome::ApplicationError { message }
            | LoginOutcome::CredentialError { message } => message,
            LoginOutcome::TransportError { .. } => UNEXPECTED_ERROR_MESSAGE,
        }
    }

    /// Whether the user is sent to the authenticated area.
    pub fn redirects(&self) -> bool {
        matches!(self, LoginOutcome::Success | LoginOutcome::Info { .. })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use signin_api::LoginResponseData;

    use super::*;

    fn response(status_code: u16, status: Option<&str>) -> LoginApiResponse {
        LoginApiResponse::new(
            StatusCode::from_u16(status_code).unwrap(),
            LoginResponseData {
                token: Some("token".to_string()),
                status: status.map(str::to_string),
            },
        )
    }

    #[test]
    fn success_status_on_2xx() {
        let outcome = classify(&response(200, Some("Success")));

        assert_eq!(outcome, LoginOutcome::Success);
        assert_eq!(outcome.severity(), Severity::Success);
        assert_eq!(outcome.message(), "Login successful!");
        assert!(outcome.redirects());
    }

    #[test]
    fn info_status_on_2xx() {
        let outcome = classify(&response(200, Some("Info")));

        assert_eq!(
            outcome,
            LoginOutcome::Info {
                message: "Info".to_string()
            }
        );
        assert_eq!(outcome.severity(), Severity::Info);
        assert_eq!(outcome.message(), "Info");
        assert!(outcome.redirects());
    }

    #[test]
    fn any_other_2xx_is_success() {
        for status in [None, Some(""), Some("Error"), Some("Whatever")] {
            let outcome = classify(&response(201, status));
            assert_eq!(outcome, LoginOutcome::Success, "{status:?}");
        }
    }

    #[test]
    fn error_status_on_failure_is_a_warning() {
        let outcome = classify(&response(401, Some("Error")));

        assert_eq!(
            outcome,
            LoginOutcome::ApplicationError {
                message: "Error".to_string()
            }
        );
        assert_eq!(outcome.severity(), Severity::Warning);
        assert_eq!(outcome.message(), "Error");
        assert!(!outcome.redirects());
    }

    #[test]
    fn other_status_on_failure_is_shown_as_error() {
        let outcome = classify(&response(403, Some("Account locked")));

        assert_eq!(
            outcome,
            LoginOutcome::CredentialError {
                message: "Account locked".to_string()
            }
        );
        assert_eq!(outcome.severity(), Severity::Error);
        assert!(!outcome.redirects());
    }

    #[test]
    fn success_status_on_failure_is_still_a_failure() {
        let outcome = classify(&response(500, Some("Success")));

        assert_eq!(
            outcome,
            LoginOutcome::CredentialError {
                message: "Success".to_string()
            }
        );
    }

    #[test]
    fn missing_or_empty_status_on_failure_falls_back() {
        for status in [None, Some("")] {
            let outcome = classify(&response(401, status));

            assert_eq!(outcome.message(), "Incorrect credentials", "{status:?}");
            assert_eq!(outcome.severity(), Severity::Error);
            assert!(!outcome.redirects());
        }
    }

    #[test]
    fn transport_errors_show_generic_message() {
        let error = signin_api::Error::NotConnected("connection refused".to_string());
        let outcome = LoginOutcome::from(&error);

        assert!(matches!(
            &outcome,
            LoginOutcome::TransportError { reason } if reason.contains("connection refused")
        ));
        assert_eq!(outcome.message(), "An unexpected error occurred.");
        assert_eq!(outcome.severity(), Severity::Error);
        assert!(!outcome.redirects());
    }
}
