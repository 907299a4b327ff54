//! Endpoint functions for the provider auth surface.
//!
//! These are hand-written rather than generated: the auth surface the SDK
//! consumes is four endpoints, and two of them (the token endpoints) carry
//! OAuth2 semantics that generators model poorly.

use autostop_api_base::{Configuration, Error};
use reqwest_middleware::RequestBuilder;

use crate::models::{
    IdentityUser, ProviderSession, SignupRequest, SignupResponse, TokenPasswordRequest,
};

fn apply_auth_headers(configuration: &Configuration, mut request: RequestBuilder) -> RequestBuilder {
    if let Some(api_key) = &configuration.api_key {
        request = request.header("apikey", api_key);
    }
    if let Some(token) = &configuration.access_token {
        request = request.header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {token}"),
        );
    }
    request
}

async fn error_for_status(response: reqwest::Response) -> Error {
    let status = response.status();
    let content = response.text().await.unwrap_or_default();
    Error::Response { status, content }
}

/// Creates an account with a password via `POST /signup`.
pub async fn signup_post(
    configuration: &Configuration,
    request: &SignupRequest,
) -> Result<SignupResponse, Error> {
    let url = format!("{}/signup", configuration.base_path);

    let req = apply_auth_headers(configuration, configuration.client.post(url))
        .header(reqwest::header::ACCEPT, "application/json")
        .json(request);

    let response = req.send().await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }

    Ok(response.json().await?)
}

/// Exchanges credentials for a session via `POST /token?grant_type=password`.
pub async fn token_password_post(
    configuration: &Configuration,
    request: &TokenPasswordRequest,
) -> Result<ProviderSession, Error> {
    let url = format!("{}/token", configuration.base_path);

    let req = apply_auth_headers(configuration, configuration.client.post(url))
        .query(&[("grant_type", "password")])
        .header(reqwest::header::ACCEPT, "application/json")
        // per OAuth2 spec recommendation for token requests (https://www.rfc-editor.org/rfc/rfc6749.html#section-5.1)
        // we include no-cache headers to prevent caching of sensitive token
        // requests / responses.
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .header(reqwest::header::PRAGMA, "no-cache")
        .json(request);

    let response = req.send().await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }

    Ok(response.json().await?)
}

/// Revokes the session identified by the bearer token via `POST /logout`.
pub async fn logout_post(configuration: &Configuration) -> Result<(), Error> {
    let url = format!("{}/logout", configuration.base_path);

    let req = apply_auth_headers(configuration, configuration.client.post(url));

    let response = req.send().await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }

    Ok(())
}

/// Returns the account behind the bearer token via `GET /user`, proving the
/// session is still valid.
pub async fn user_get(configuration: &Configuration) -> Result<IdentityUser, Error> {
    let url = format!("{}/user", configuration.base_path);

    let req = apply_auth_headers(configuration, configuration.client.get(url))
        .header(reqwest::header::ACCEPT, "application/json");

    let response = req.send().await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }

    Ok(response.json().await?)
}
