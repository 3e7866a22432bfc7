//! `bazaar-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP concerns).

pub mod error;
pub mod id;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use id::OfferId;
pub use validate::{FieldIssue, ValidationReport};
