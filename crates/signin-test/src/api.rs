use signin_api::{Configuration, LOGIN_PATH};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

/// Helper for testing the sign-in API using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<Mock>) -> (MockServer, Configuration) {
    let server = MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = Configuration {
        base_path: server.uri(),
        client: reqwest::Client::new().into(),
        user_agent: Some("test-agent".to_string()),
    };

    (server, config)
}

/// Starts a mock server answering `POST /api/login` with `status_code` and the body built by
/// [login_response_body].
pub async fn start_login_mock(
    status_code: u16,
    status: Option<&str>,
    token: Option<&str>,
) -> (MockServer, Configuration) {
    let mock = Mock::given(matchers::method("POST"))
        .and(matchers::path(LOGIN_PATH))
        .respond_with(
            ResponseTemplate::new(status_code).set_body_json(login_response_body(status, token)),
        );

    start_api_mock(vec![mock]).await
}

/// Builds a login response body, omitting the fields passed as `None`.
pub fn login_response_body(status: Option<&str>, token: Option<&str>) -> serde_json::Value {
    let mut data = serde_json::Map::new();
    if let Some(status) = status {
        data.insert("Status".to_string(), status.into());
    }
    if let Some(token) = token {
        data.insert("Token".to_string(), token.into());
    }

    serde_json::json!({ "data": data })
}

/// A configuration pointing at a port that refuses connections.
pub fn unreachable_config() -> Configuration {
    Configuration::new("http://127.0.0.1:1")
}
