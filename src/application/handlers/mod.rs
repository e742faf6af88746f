//! Application handlers.
//!
//! Command handlers and startup steps that orchestrate domain operations.

pub mod assessment;
