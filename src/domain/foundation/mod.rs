//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the tendency calculator domain.

mod errors;
mod probability;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use probability::Probability;
