use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{Configuration, Error};

/// Path of the login endpoint, relative to [Configuration::base_path].
pub const LOGIN_PATH: &str = "/api/login";

/// Body of a login request. Serialized as `{ "username", "password", "rememberMe" }`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginApiRequest {
    /// Account name as typed by the user
    pub username: String,
    /// Plain-text password, sent over the transport as-is
    pub password: String,
    /// Whether the user asked for a persistent session
    pub remember_me: bool,
}

impl fmt::Debug for LoginApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginApiRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// The `data` object wrapped by every login response.
///
/// Both fields are optional; `null` and a missing key are treated the same way.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginResponseData {
    /// Session token issued by the server
    #[serde(rename = "Token", default)]
    pub token: Option<String>,
    /// Application-level status, conventionally `Success`, `Info` or `Error`
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

#[derive(Deserialize)]
struct LoginResponseEnvelope {
    data: LoginResponseData,
}

/// A login response as received from the server, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginApiResponse {
    /// Transport-level success, i.e. a 2xx status code
    pub ok: bool,
    /// The HTTP status code of the response
    pub status_code: StatusCode,
    /// The parsed `data` object
    pub data: LoginResponseData,
}

impl LoginApiResponse {
    /// Builds a response from its parts. `ok` is derived from the status code.
    pub fn new(status_code: StatusCode, data: LoginResponseData) -> Self {
        Self {
            ok: status_code.is_success(),
            status_code,
            data,
        }
    }
}

/// Sends the credentials to the login endpoint and returns the parsed response.
///
/// The body is parsed whatever the HTTP status is, so non-2xx answers are returned as
/// `Ok` with `ok == false`. Only failures to reach the server or to parse the body are errors.
pub async fn send_login_request(
    config: &Configuration,
    request: &LoginApiRequest,
) -> Result<LoginApiResponse, Error> {
    let mut builder = config
        .client
        .post(config.url(LOGIN_PATH))
        .header(reqwest::header::ACCEPT, "application/json")
        .json(request);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.header(reqwest::header::USER_AGENT, user_agent);
    }

    let response = builder.send().await?;
    let status_code = response.status();
    let body = response.bytes().await?;

    let envelope: LoginResponseEnvelope = serde_json::from_slice(&body)?;

    Ok(LoginApiResponse::new(status_code, envelope.data))
}
