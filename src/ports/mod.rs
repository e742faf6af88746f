//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Classifier` - Pre-trained model probability interface
//! - `ModelSource` - One-time loading of the model artifact and its metadata

mod classifier;
mod model_source;

pub use classifier::{Classifier, PositiveClass};
pub use model_source::{ArtifactError, LoadedModel, ModelMetadata, ModelSource};
