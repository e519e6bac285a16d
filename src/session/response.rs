use serde::{Deserialize, Serialize};

/// Body of the OAuth2 client-credentials token exchange
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Always `client_credentials`
    pub grant_type: &'a str,
    /// API key acting as the OAuth2 client identifier
    pub client_id: &'a str,
    /// API secret acting as the OAuth2 client secret
    pub client_secret: &'a str,
}

impl<'a> TokenRequest<'a> {
    /// Builds a client-credentials exchange request for the given credentials
    pub fn client_credentials(client_id: &'a str, client_secret: &'a str) -> Self {
        Self {
            grant_type: "client_credentials",
            client_id,
            client_secret,
        }
    }
}

/// Successful token exchange payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Token type, usually "Bearer"
    pub token_type: String,
    /// Validity window in seconds
    pub expires_in: u64,
    /// The bearer credential itself
    pub access_token: String,
}
