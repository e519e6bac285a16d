//! Authentication for the Petfinder API
//!
//! One client-credentials exchange per client instance: the returned bearer
//! token is stored in memory and attached to every subsequent request. There
//! is no automatic refresh: a token that expires mid-session stays expired,
//! and later calls come back from the upstream as 401 Failures.

use crate::config::Config;
use crate::constants::{TOKEN_RESOURCE, USER_AGENT};
use crate::error::AppError;
use crate::session::response::{TokenRequest, TokenResponse};
use crate::transport::response::{ApiResponse, send_request};
use chrono::Utc;
use reqwest::{Client, Method};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Bearer token obtained from the client-credentials exchange
#[derive(Debug, Clone)]
pub struct BearerToken {
    /// The credential attached to requests
    pub access_token: String,
    /// Token type (usually "Bearer")
    pub token_type: String,
    /// Validity window in seconds, as reported by the upstream
    pub expires_in: u64,
    /// Timestamp when the token was obtained (seconds since epoch)
    pub obtained_at: i64,
}

impl BearerToken {
    /// Creates a new bearer token stamped with the current time
    pub fn new(access_token: String, token_type: String, expires_in: u64) -> Self {
        Self {
            access_token,
            token_type,
            expires_in,
            obtained_at: Utc::now().timestamp(),
        }
    }

    /// Whether the validity window has elapsed. Nothing in the client
    /// consults this; callers that care can check before a long run.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.obtained_at + self.expires_in as i64
    }
}

/// Authentication manager for the Petfinder API
pub struct Auth {
    config: Arc<Config>,
    http: Client,
    token: RwLock<Option<BearerToken>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http,
            token: RwLock::new(None),
        }
    }

    /// Performs the OAuth2 client-credentials token exchange.
    ///
    /// On a 200, stores the returned bearer token so it rides on all
    /// subsequent requests of this client instance and returns the Success
    /// variant wrapping the token payload. On any other status, logs a
    /// diagnostic and returns the Failure; the token store is left empty,
    /// so later calls hit the upstream unauthenticated and fail there with
    /// 401 rather than failing fast locally.
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Success or Failure, per the upstream status
    /// * `Err(AppError)` - Only for transport-level faults
    pub async fn authenticate(&self) -> Result<ApiResponse, AppError> {
        let url = format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            TOKEN_RESOURCE
        );

        let body = TokenRequest::client_credentials(
            &self.config.credentials.api_key,
            &self.config.credentials.api_secret,
        );

        let response = send_request(&self.http, Method::POST, &url, None, None, Some(&body)).await?;

        match &response {
            ApiResponse::Success { data } => {
                let token: TokenResponse = serde_json::from_value(data.clone())?;
                info!("✓ Authenticated, token valid for {}s", token.expires_in);

                let mut guard = self.token.write().await;
                *guard = Some(BearerToken::new(
                    token.access_token,
                    token.token_type,
                    token.expires_in,
                ));
            }
            ApiResponse::Failure(failure) => {
                error!(
                    "Authentication failed with status {}: {}",
                    failure.status_code, failure.message
                );
            }
        }

        Ok(response)
    }

    /// Returns the stored access token, if the exchange has succeeded
    pub async fn bearer(&self) -> Option<String> {
        let guard = self.token.read().await;
        guard.as_ref().map(|token| token.access_token.clone())
    }

    /// Returns a copy of the stored token with its metadata, if any
    pub async fn token(&self) -> Option<BearerToken> {
        let guard = self.token.read().await;
        guard.clone()
    }
}
