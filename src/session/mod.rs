/// OAuth2 client-credentials authentication and token storage
pub mod auth;
/// Wire models for the token exchange
pub mod response;

pub use auth::{Auth, BearerToken};
pub use response::{TokenRequest, TokenResponse};
