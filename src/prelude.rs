//! # Petfinder Client Prelude
//!
//! Convenient single import for the types and traits most interactions
//! need.
//!
//! ## Usage
//!
//! ```rust
//! use petfinder_client::prelude::*;
//!
//! let config = Config::new();
//! let client = PetfinderHttpClientImpl::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Petfinder API client
pub use crate::config::{ChatConfig, Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler and stored token
pub use crate::session::auth::{Auth, BearerToken};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::PetfinderHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::PetfinderHttpClientImpl;

/// Normalized Success/Failure response
pub use crate::transport::response::{ApiFailure, ApiResponse, canned_message};

// ============================================================================
// CORE SERVICES
// ============================================================================

/// Animal service trait and implementation
pub use crate::application::services::{AnimalService, AnimalServiceImpl};

/// Organization service trait and implementation
pub use crate::application::services::{OrganizationService, OrganizationServiceImpl};

/// Free-text match orchestrator and its chat collaborator
pub use crate::application::services::{ChatClient, DogMatcher, OpenAiChatClient};

// ============================================================================
// VIEW MODELS
// ============================================================================

/// Display-ready dog summary
pub use crate::application::models::DogSummary;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde_json::Value;
pub use std::sync::Arc;
