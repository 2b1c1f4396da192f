//! Core types for the CSOM platform.
//!
//! This module provides the order domain model and type-safe wrappers
//! shared by the shell and the CLI.

pub mod id;
pub mod order;
pub mod status;

pub use id::*;
pub use order::{DraftError, Order, OrderDraft, OrderDraftItem, OrderItem};
pub use status::OrderStatus;
