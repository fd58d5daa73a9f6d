use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use signin_api::Configuration;

use crate::navigation::{Navigator, DEFAULT_REDIRECT_DELAY, DEFAULT_REDIRECT_ROUTE};

/// Settings of the sign-in flow. Every field is optional when deserializing.
///
/// Defaults to
///
/// ```
/// # use signin_core::SigninSettings;
/// let settings = SigninSettings {
///     api_url: "http://localhost:3000".to_string(),
///     user_agent: "Signin Rust-SDK".to_string(),
///     redirect_route: "/dashboard".to_string(),
///     redirect_delay_ms: 3000,
/// };
/// assert_eq!(settings, SigninSettings::default());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SigninSettings {
    /// Base url of the application serving `/api/login`.
    pub api_url: String,
    /// The user_agent sent with the login request.
    pub user_agent: String,
    /// Route of the authenticated area, entered after a successful login.
    pub redirect_route: String,
    /// How long the outcome notification is shown before redirecting, in milliseconds.
    pub redirect_delay_ms: u64,
}

impl Default for SigninSettings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".into(),
            user_agent: "Signin Rust-SDK".into(),
            redirect_route: DEFAULT_REDIRECT_ROUTE.into(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY.as_millis() as u64,
        }
    }
}

impl SigninSettings {
    /// Parses settings from JSON, filling missing fields with their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The delay before redirecting after a successful login.
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// The navigator implementing the redirect described by these settings.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.redirect_route.clone(), self.redirect_delay())
    }

    /// API configuration targeting `api_url`.
    pub fn api_configuration(&self) -> Configuration {
        Configuration {
            user_agent: Some(self.user_agent.clone()),
            ..Configuration::new(self.api_url.clone())
        }
    }
}
