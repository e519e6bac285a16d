/// Default base URL for the Petfinder REST API
pub const DEFAULT_BASE_URL: &str = "https://api.petfinder.com/v2";
/// Resource path for the OAuth2 client-credentials token exchange
pub const TOKEN_RESOURCE: &str = "oauth2/token";
/// Default number of results per page in list requests
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Hard cap on the number of pages fetched by a single paginated call.
/// A well-behaved upstream terminates long before this; the cap only guards
/// against a pagination block that never reports the last page.
pub const MAX_PAGE_FETCHES: u64 = 1000;
/// User agent string used in HTTP requests to identify this client to the Petfinder API
pub const USER_AGENT: &str = "petfinder-client/0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Default base URL for the chat-completion collaborator
pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.openai.com";
/// Default model used to translate adoption wishes into search parameters
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
/// Default token budget for a single chat completion
pub const DEFAULT_CHAT_MAX_TOKENS: u32 = 150;
