//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `model` - Tree ensemble classifier loaded from JSON files
//! - `http` - Axum routes for the questionnaire page and API

pub mod http;
pub mod model;

pub use model::{FsModelSource, TreeEnsembleClassifier};
