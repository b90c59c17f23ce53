//! Middleware stack for the API

pub mod envelope;
pub mod layers;
pub mod request_id;
pub mod security;

// Re-export public API
pub use envelope::error_envelope_middleware;
pub use layers::{compression, cors};
pub use request_id::request_id_middleware;
pub use security::security_headers_middleware;
