//! Filesystem model source: reads the JSON artifact and metadata files.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::ports::{ArtifactError, LoadedModel, ModelMetadata, ModelSource};

use super::artifact::ModelArtifact;
use super::tree_ensemble::TreeEnsembleClassifier;

/// Loads the tree ensemble and its metadata from two files on disk.
pub struct FsModelSource {
    artifact_path: PathBuf,
    metadata_path: PathBuf,
}

impl FsModelSource {
    pub fn new(artifact_path: impl AsRef<Path>, metadata_path: impl AsRef<Path>) -> Self {
        Self {
            artifact_path: artifact_path.as_ref().to_path_buf(),
            metadata_path: metadata_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ModelSource for FsModelSource {
    async fn load(&self) -> Result<LoadedModel, ArtifactError> {
        let artifact_bytes = read_file(&self.artifact_path).await?;
        let metadata_bytes = read_file(&self.metadata_path).await?;

        let metadata: ModelMetadata = parse_json(&self.metadata_path, &metadata_bytes)?;

        if let Some(expected) = &metadata.sha256 {
            let actual = compute_checksum(&artifact_bytes);
            if !actual.eq_ignore_ascii_case(expected.trim()) {
                return Err(ArtifactError::ChecksumMismatch {
                    path: self.artifact_path.display().to_string(),
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        let artifact: ModelArtifact = parse_json(&self.artifact_path, &artifact_bytes)?;
        let classifier = TreeEnsembleClassifier::from_artifact(artifact)?;

        tracing::info!(
            model = %metadata.model_name,
            version = metadata.model_version.as_deref().unwrap_or("unversioned"),
            trees = classifier.tree_count(),
            columns = classifier.column_count(),
            "Loaded model artifact from {}",
            self.artifact_path.display()
        );

        Ok(LoadedModel {
            classifier: Arc::new(classifier),
            metadata,
        })
    }

    fn describe(&self) -> String {
        format!(
            "{} and {}",
            self.artifact_path.display(),
            self.metadata_path.display()
        )
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::NotFound(path.display().to_string())
        } else {
            ArtifactError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        }
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T, ArtifactError> {
    serde_json::from_slice(bytes).map_err(|e| ArtifactError::Malformed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn compute_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
