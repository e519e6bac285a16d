//! Response normalization for the Petfinder API
//!
//! Every HTTP outcome is folded into [`ApiResponse`]: a 200 becomes
//! `Success` with the decoded JSON body, any other status becomes `Failure`
//! with the status code, reason phrase, a canned human-readable message and
//! the raw body text. Callers branch on the variant before touching the
//! payload; the two shapes share no fields.

use crate::error::AppError;
use once_cell::sync::Lazy;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Canned messages for the upstream statuses we see most often.
static ERROR_MESSAGES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (401, "Unauthorized request, please check your credentials."),
        (403, "Insufficient access to the requested resource."),
        (404, "Requested resource could not be found."),
        (500, "Unexpected error - If the problem persists, please contact support."),
    ])
});

const FALLBACK_MESSAGE: &str = "An error occurred with your request.";

/// Returns the human-readable message for an upstream HTTP status code.
///
/// Statuses outside the fixed table fall back to a generic message.
pub fn canned_message(status_code: u16) -> &'static str {
    ERROR_MESSAGES
        .get(&status_code)
        .copied()
        .unwrap_or(FALLBACK_MESSAGE)
}

/// Details of a non-200 upstream response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// Numeric HTTP status code
    pub status_code: u16,
    /// Transport-level reason phrase (e.g. "Unauthorized")
    pub reason: String,
    /// Human-readable message from the fixed status table
    pub message: String,
    /// Raw response body text
    pub details: String,
}

/// Normalized result of one client operation against the listing API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The upstream answered 200; carries the decoded JSON body
    Success {
        /// Decoded JSON body of the response
        data: Value,
    },
    /// The upstream answered with any other status
    Failure(ApiFailure),
}

impl ApiResponse {
    /// Whether this is the `Success` variant
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Borrows the Success payload, if any
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResponse::Success { data } => Some(data),
            ApiResponse::Failure(_) => None,
        }
    }

    /// Borrows the Failure details, if any
    #[must_use]
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Failure(failure) => Some(failure),
        }
    }
}

/// Classifies an HTTP response into the normalized Success/Failure shape.
///
/// Only a decode problem on a 200 body is an error here; HTTP error statuses
/// always come back as `Ok(Failure)`.
pub async fn classify_response(response: Response) -> Result<ApiResponse, AppError> {
    let status = response.status();

    if status == StatusCode::OK {
        let data: Value = response.json().await?;
        return Ok(ApiResponse::Success { data });
    }

    let reason = status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string();
    let details = response.text().await.unwrap_or_default();

    Ok(ApiResponse::Failure(ApiFailure {
        status_code: status.as_u16(),
        reason,
        message: canned_message(status.as_u16()).to_string(),
        details,
    }))
}

/// Issues one HTTP request and normalizes the outcome.
///
/// This is the shared primitive under every client operation, including the
/// token exchange. Transport-level failures (DNS, connection refused,
/// timeout) surface as `Err` and are never retried.
///
/// # Arguments
///
/// * `http` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `bearer` - Bearer token to attach as the authorization header, if any
/// * `query` - Query parameters to append, if any
/// * `body` - Request body to serialize as JSON, if any
pub async fn send_request<B: Serialize>(
    http: &Client,
    method: Method,
    url: &str,
    bearer: Option<&str>,
    query: Option<&[(String, String)]>,
    body: Option<&B>,
) -> Result<ApiResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = http.request(method, url);

    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }
    if let Some(q) = query {
        request = request.query(q);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());

    classify_response(response).await
}
