use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::auth::Auth;
use crate::transport::response::{ApiResponse, send_request};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Transport seam for the typed listing services.
///
/// Services depend on this trait rather than on a concrete HTTP stack, so
/// tests can substitute a scripted transport.
#[async_trait]
pub trait PetfinderHttpClient: Send + Sync {
    /// Issues one request against a resource path and returns the
    /// normalized outcome.
    async fn request(
        &self,
        method: Method,
        resource: &str,
        query: Option<&[(String, String)]>,
        body: Option<Value>,
    ) -> Result<ApiResponse, AppError>;
}

/// HTTP client for the Petfinder API
///
/// Owns the underlying session exclusively: one reqwest client plus the
/// bearer token obtained by [`Auth::authenticate`]. The token rides on every
/// request for the lifetime of this instance; it is never refreshed.
pub struct PetfinderHttpClientImpl {
    config: Arc<Config>,
    auth: Arc<Auth>,
    http: Client,
}

impl PetfinderHttpClientImpl {
    /// Creates a new client. No request is issued until
    /// [`authenticate`](Self::authenticate) or an accessor is called.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        let auth = Arc::new(Auth::new(config.clone()));

        Self { config, auth, http }
    }

    /// Performs the client-credentials token exchange and stores the bearer
    /// token for subsequent requests. See [`Auth::authenticate`] for the
    /// failure semantics.
    pub async fn authenticate(&self) -> Result<ApiResponse, AppError> {
        self.auth.authenticate().await
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    fn rest_url(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl PetfinderHttpClient for PetfinderHttpClientImpl {
    async fn request(
        &self,
        method: Method,
        resource: &str,
        query: Option<&[(String, String)]>,
        body: Option<Value>,
    ) -> Result<ApiResponse, AppError> {
        let bearer = self.auth.bearer().await;
        let url = self.rest_url(resource);

        send_request(
            &self.http,
            method,
            &url,
            bearer.as_deref(),
            query,
            body.as_ref(),
        )
        .await
    }
}

impl Default for PetfinderHttpClientImpl {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
