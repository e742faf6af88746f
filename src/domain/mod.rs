//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `assessment` - Questionnaire vocabularies, subject record, decision rule

pub mod assessment;
pub mod foundation;
