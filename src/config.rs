use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MAX_TOKENS, DEFAULT_CHAT_MODEL,
    DEFAULT_PAGE_SIZE, DEFAULT_REST_TIMEOUT,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Petfinder API
pub struct Credentials {
    /// API key (the OAuth2 client identifier)
    pub api_key: String,
    /// API secret (the OAuth2 client secret)
    pub api_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the Petfinder REST API
pub struct RestApiConfig {
    /// Base URL for the Petfinder REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the chat-completion collaborator that translates
/// free-text adoption wishes into search parameters
pub struct ChatConfig {
    /// API key for the chat-completion service
    pub api_key: String,
    /// Base URL for the chat-completion service
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Token budget for a single completion
    pub max_tokens: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Petfinder API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Chat-completion collaborator configuration
    pub chat: ChatConfig,
    /// Number of items to retrieve per page in list requests
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables,
    /// loading a `.env` file first when one is present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("PETFINDER_API_KEY", String::from("default_api_key"));
        let api_secret =
            get_env_or_default("PETFINDER_API_SECRET", String::from("default_api_secret"));

        // Check if we are using default values
        if api_key == "default_api_key" {
            error!("PETFINDER_API_KEY not found in environment variables or .env file");
        }
        if api_secret == "default_api_secret" {
            error!("PETFINDER_API_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                api_key,
                api_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "PETFINDER_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("PETFINDER_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            chat: ChatConfig {
                api_key: get_env_or_default("OPENAI_API_KEY", String::new()),
                base_url: get_env_or_default(
                    "OPENAI_BASE_URL",
                    String::from(DEFAULT_CHAT_BASE_URL),
                ),
                model: get_env_or_default("OPENAI_MODEL", String::from(DEFAULT_CHAT_MODEL)),
                max_tokens: get_env_or_default("OPENAI_MAX_TOKENS", DEFAULT_CHAT_MAX_TOKENS),
            },
            page_size: get_env_or_default("PETFINDER_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }
}
