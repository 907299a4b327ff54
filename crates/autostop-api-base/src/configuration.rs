//! Configuration types for API clients.

/// Configuration for an API client.
///
/// This struct provides all the configuration options needed for making
/// requests to one surface of the hosted provider (auth endpoints or the
/// row API).
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL path for the API surface (e.g., "<https://autostop.supabase.co/auth/v1>").
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
    /// Project API key, sent as the `apikey` header on every request.
    pub api_key: Option<String>,
    /// Access token of the signed-in user, sent as a bearer token when present.
    pub access_token: Option<String>,
}
