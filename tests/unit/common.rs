use petfinder_client::config::{ChatConfig, Config, Credentials, RestApiConfig};

/// Builds a config pointed at a mock server.
pub fn create_test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            api_key: "test_api_key".to_string(),
            api_secret: "test_api_secret".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 30,
        },
        chat: ChatConfig {
            api_key: "test_chat_key".to_string(),
            base_url: server_url.to_string(),
            model: "test-model".to_string(),
            max_tokens: 150,
        },
        page_size: 20,
    }
}
