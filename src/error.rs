//! Error types for the Petfinder client
//!
//! Only genuine faults become an [`AppError`]: transport failures, undecodable
//! payloads, and chat-collaborator problems. HTTP error statuses from the
//! listing API are NOT errors at this level; they are normalized into
//! [`crate::transport::ApiResponse::Failure`] values that callers branch on.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// Network-level failure (DNS, connection refused, timeout). Propagates
    /// to the caller without retry.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON (de)serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A 200 response whose body is missing keys the operation relies on,
    /// e.g. a list payload without a `pagination` block
    #[error("unexpected payload shape: {0}")]
    UnexpectedPayload(String),

    /// The chat-completion collaborator failed or returned an unusable response
    #[error("chat completion failed: {0}")]
    ChatCompletion(String),

    /// The language model replied with something that does not parse as a
    /// JSON object of search parameters
    #[error("model output is not valid JSON: {0}")]
    MalformedModelOutput(String),
}
