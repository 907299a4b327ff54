//! Endpoint functions for the profile table.

use autostop_api_base::{urlencode, Configuration, Error};
use reqwest_middleware::RequestBuilder;

use crate::models::{ProfileRecord, ProfileRow};

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

/// Inserts a profile row keyed by the account id via `POST /profiles`.
pub async fn profiles_insert_post(
    configuration: &Configuration,
    record: &ProfileRecord,
) -> Result<(), Error> {
    let url = format!("{}/profiles", configuration.base_path);

    // The row API accepts a batch; the SDK always inserts exactly one row.
    let req = apply_auth_headers(configuration, configuration.client.post(url))
        .header("Prefer", "return=minimal")
        .json(&[record]);

    let response = req.send().await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }

    Ok(())
}

/// Reads the `username,avatar` projection for one account from
/// `GET /profiles?id=eq.<id>&select=username,avatar`. A missing row is not
/// an error.
pub async fn profiles_select_get(
    configuration: &Configuration,
    id: uuid::Uuid,
) -> Result<Option<ProfileRow>, Error> {
    let url = format!(
        "{}/profiles?id=eq.{}&select=username,avatar",
        configuration.base_path,
        urlencode(id.to_string())
    );

    let req = apply_auth_headers(configuration, configuration.client.get(url))
        .header(reqwest::header::ACCEPT, "application/json");

    let response = req.send().await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }

    let mut rows: Vec<ProfileRow> = response.json().await?;
    if rows.is_empty() {
        return Ok(None);
    }
    Ok(Some(rows.swap_remove(0)))
}

#[cfg(test)]
mod tests {
    use autostop_test::start_api_mock;
    use chrono::Utc;
    use wiremock::{matchers, Mock, ResponseTemplate};

    use super::*;

    const TEST_USER_ID: &str = "5a6e4f46-6e0b-4a0a-8a3f-1f6b1e1a2b3c";

    fn test_id() -> uuid::Uuid {
        TEST_USER_ID.parse().expect("valid uuid")
    }

    #[tokio::test]
    async fn insert_sends_single_row_batch() {
        let (_server, config) = start_api_mock(vec![Mock::given(matchers::method("POST"))
            .and(matchers::path("/profiles"))
            .and(matchers::header("Prefer", "return=minimal"))
            .and(matchers::body_partial_json(serde_json::json!([{
                "id": TEST_USER_ID,
                "username": "anna",
                "email": "anna@autostop.com"
            }])))
            .respond_with(ResponseTemplate::new(201))])
        .await;

        profiles_insert_post(
            &config,
            &ProfileRecord {
                id: test_id(),
                username: "anna".to_string(),
                email: "anna@autostop.com".to_string(),
                avatar: None,
                created_at: Utc::now(),
            },
        )
        .await
        .expect("insert should succeed");
    }

    #[tokio::test]
    async fn select_returns_first_row() {
        let (_server, config) = start_api_mock(vec![Mock::given(matchers::method("GET"))
            .and(matchers::path("/profiles"))
            .and(matchers::query_param("id", format!("eq.{TEST_USER_ID}")))
            .and(matchers::query_param("select", "username,avatar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "username": "anna", "avatar": "steve" }
            ])))])
        .await;

        let row = profiles_select_get(&config, test_id())
            .await
            .expect("select should succeed")
            .expect("row should be present");
        assert_eq!(row.username, "anna");
        assert_eq!(row.avatar.as_deref(), Some("steve"));
    }

    #[tokio::test]
    async fn select_missing_row_is_none() {
        let (_server, config) = start_api_mock(vec![Mock::given(matchers::method("GET"))
            .and(matchers::path("/profiles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))])
        .await;

        let row = profiles_select_get(&config, test_id())
            .await
            .expect("select should succeed");
        assert!(row.is_none());
    }
}
