// API client library for the TEN Navigator backend
//
// This crate wraps the backend REST API: it attaches the default headers,
// serializes payloads, and normalizes HTTP and transport failures into
// `ApiError` values with user-facing messages.

pub mod endpoints;
pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use errors::{http_error_message, ApiError, NETWORK_ERROR_MESSAGE};
pub use http_client::{normalize_response, ApiClient, API_KEY_HEADER};
