use autostop_api_base::Configuration;
use autostop_core::{Client, ClientSettings};

/// Helper for testing a single API surface using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes.
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, Configuration) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = Configuration {
        base_path: server.uri(),
        client: reqwest::Client::new().into(),
        api_key: Some("test-key".to_string()),
        access_token: None,
    };

    (server, config)
}

/// Helper for testing full client flows against a mocked provider.
///
/// The returned [`Client`] targets the mock server, so the auth surface is
/// reachable under `/auth/v1/...` and the row API under `/rest/v1/...`.
pub async fn start_provider_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, Client) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let client = Client::new(Some(ClientSettings {
        provider_url: server.uri(),
        api_key: Some("test-key".to_string()),
        ..ClientSettings::default()
    }));

    (server, client)
}
