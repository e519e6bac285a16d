/// HTTP client trait and implementation for the Petfinder API
pub mod http_client;
/// Normalized Success/Failure response model and status classification
pub mod response;

pub use http_client::{PetfinderHttpClient, PetfinderHttpClientImpl};
pub use response::{ApiFailure, ApiResponse, canned_message, send_request};
