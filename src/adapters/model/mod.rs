//! Model adapters: artifact format, tree ensemble classifier, filesystem loader.

mod artifact;
mod filesystem;
mod tree_ensemble;

pub use artifact::{FeatureSpec, ModelArtifact, NodeSpec, TreeSpec};
pub use filesystem::{compute_checksum, FsModelSource};
pub use tree_ensemble::TreeEnsembleClassifier;
