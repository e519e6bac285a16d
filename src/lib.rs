//! Client for the Petfinder pet-adoption listing API
//!
//! Wraps the OAuth2 client-credentials flow and a normalizing HTTP layer,
//! and exposes typed accessors for organizations, animal types and breeds,
//! and animals, with optional automatic pagination. A small orchestration
//! layer turns a free-text adoption wish into structured search parameters
//! via a language-model call and shapes the matching dogs for display.
//!
//! Every listing operation returns an [`transport::ApiResponse`]: `Success`
//! with the decoded JSON body for a 200, `Failure` with normalized error
//! details for anything else. Transport-level faults are the only `Err`s.
//!
//! # Example
//! ```ignore
//! use petfinder_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(PetfinderHttpClientImpl::new(config));
//! client.authenticate().await?;
//!
//! let animals = AnimalServiceImpl::new(client.clone());
//! let response = animals
//!     .get_animals_paginated(&[("type".into(), "dog".into())])
//!     .await?;
//! if let Some(data) = response.data() {
//!     println!("{} dogs", data["animals"].as_array().map_or(0, Vec::len));
//! }
//! ```

/// Typed accessors, pagination, match orchestration, and view models
pub mod application;
/// Environment-driven configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Commonly used types and traits, re-exported
pub mod prelude;
/// OAuth2 authentication and token storage
pub mod session;
/// HTTP transport and response normalization
pub mod transport;
/// Small shared utilities
pub mod utils;

/// Library version, taken from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
