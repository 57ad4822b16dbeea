//! HTTP middleware stack for the site API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction)
//! 2. CORS (only when `SITE_ALLOWED_ORIGIN` is set)
//! 3. `TraceLayer` (request span with status and latency)
//! 4. Request ID (accept or mint `x-request-id`)
//! 5. Security headers

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
