use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the targets and
/// behavior of the Autostop client. They are optional and uneditable once the
/// client is initialized.
///
/// Defaults to
///
/// ```
/// # use autostop_core::ClientSettings;
/// let settings = ClientSettings {
///     provider_url: "https://autostop.supabase.co".to_string(),
///     api_key: None,
///     account_domain: "autostop.com".to_string(),
///     user_agent: "Autostop Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// Base URL of the hosted provider. The auth surface lives under
    /// `/auth/v1` and the row API under `/rest/v1`.
    pub provider_url: String,
    /// Project API key, sent as the `apikey` header on every request.
    pub api_key: Option<String>,
    /// Domain used to derive the synthetic account address from a username.
    pub account_domain: String,
    /// The user_agent to send to the provider. Defaults to `Autostop Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            provider_url: "https://autostop.supabase.co".into(),
            api_key: None,
            account_domain: "autostop.com".into(),
            user_agent: "Autostop Rust-SDK".into(),
        }
    }
}
