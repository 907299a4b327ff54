use serde::{Deserialize, Serialize};

/// Error body returned by the provider auth endpoints.
///
/// The token endpoint uses the OAuth2 `error`/`error_description` pair,
/// while the other endpoints use `msg` (and some older deployments `message`).
/// All four are accepted; [`AuthErrorResponse::message`] picks the most
/// descriptive one present.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AuthErrorResponse {
    #[allow(missing_docs)]
    #[serde(default)]
    pub error: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub error_description: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub msg: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthErrorResponse {
    /// Best human-readable message available in the body.
    pub fn message(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.message.clone())
            .or_else(|| self.error.clone())
    }

    /// Extracts a human-readable message from a raw error body, falling back
    /// to the body itself when it isn't the expected JSON shape.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<AuthErrorResponse>(body)
            .ok()
            .and_then(|e| e.message())
            .unwrap_or_else(|| body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oauth_error_shape() {
        let message = AuthErrorResponse::message_from_body(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(message, "Invalid login credentials");
    }

    #[test]
    fn msg_shape() {
        let message = AuthErrorResponse::message_from_body(
            r#"{"code":422,"msg":"Password should be at least 6 characters"}"#,
        );
        assert_eq!(message, "Password should be at least 6 characters");
    }

    #[test]
    fn unexpected_body_is_passed_through() {
        assert_eq!(
            AuthErrorResponse::message_from_body("upstream unavailable"),
            "upstream unavailable"
        );
    }
}
