//! CSOM Core - Shared types library.
//!
//! This crate provides common types used across all CSOM shell components:
//! - `shell` - Host application composing the micro-frontends
//! - `cli` - Command-line tools for configuration checks and remote probes
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Order domain model, type-safe IDs, and status classification

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
