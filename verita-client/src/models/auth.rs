use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential pair issued by the login and refresh endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: Secret<String>,
    pub refresh_token: Secret<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .finish()
    }
}

#[derive(Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_token_pair_decodes_and_redacts() {
        let pair: TokenPair = serde_json::from_str(
            r#"{"access_token":"s3cr3t-access","refresh_token":"s3cr3t-refresh","token_type":"bearer"}"#,
        )
        .unwrap();
        assert_eq!(pair.access_token.expose_secret(), "s3cr3t-access");
        assert_eq!(pair.refresh_token.expose_secret(), "s3cr3t-refresh");
        let debug = format!("{:?}", pair);
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_register_request_omits_missing_full_name() {
        let req = RegisterRequest {
            email: "a@b.com".to_string(),
            username: "ab".to_string(),
            password: "pw".to_string(),
            full_name: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("full_name").is_none());
        assert!(!format!("{:?}", req).contains("\"pw\""));
    }
}
