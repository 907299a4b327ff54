use std::sync::Arc;

use autostop_api_base::Configuration;
use reqwest::header::{self, HeaderValue};

use super::internal::InternalClient;
use crate::client::client_settings::ClientSettings;

/// The main struct to interact with the Autostop SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. Subclients and the push-notification path all share the
    // same mutable state, which therefore lives behind an Arc as part of the
    // [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Autostop client.
    pub fn new(settings_input: Option<ClientSettings>) -> Self {
        let settings = settings_input.unwrap_or_default();

        let headers = build_default_headers(&settings);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("HTTP client build should not fail");
        let http_client = reqwest_middleware::ClientBuilder::new(http_client).build();

        let base = settings.provider_url.trim_end_matches('/');

        let identity = Configuration {
            base_path: format!("{base}/auth/v1"),
            client: http_client.clone(),
            api_key: settings.api_key.clone(),
            access_token: None,
        };

        let data = Configuration {
            base_path: format!("{base}/rest/v1"),
            client: http_client,
            api_key: settings.api_key,
            access_token: None,
        };

        Self {
            internal: Arc::new(InternalClient::new(identity, data, settings.account_domain)),
        }
    }
}

/// Build default headers for the provider HTTP client
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    headers.append(
        header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_api_surfaces_from_provider_url() {
        let client = Client::new(Some(ClientSettings {
            provider_url: "https://example.test/".to_string(),
            ..ClientSettings::default()
        }));

        let config = client.internal.get_api_configurations();
        assert_eq!(config.identity.base_path, "https://example.test/auth/v1");
        assert_eq!(config.data.base_path, "https://example.test/rest/v1");
    }

    #[test]
    fn clone_shares_state() {
        let client = Client::new(None);
        let clone = client.clone();

        client.internal.set_session_tokens(crate::client::SessionTokens {
            access_token: "token".to_string(),
            refresh_token: None,
            expires_in: None,
        });

        assert!(clone.internal.is_authenticated());
        assert_eq!(
            clone
                .internal
                .get_api_configurations()
                .identity
                .access_token
                .as_deref(),
            Some("token")
        );
    }
}
