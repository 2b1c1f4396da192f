//! HTTP middleware stack for the shell.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (correlate logs, Sentry events, and responses)

pub mod request_id;

pub use request_id::request_id_middleware;
