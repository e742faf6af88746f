//! On-disk format of the model artifact.
//!
//! A binary gradient-boosted tree ensemble exported as JSON:
//!
//! ```json
//! {
//!   "classes": ["not_predisposed", "predisposed"],
//!   "features": [
//!     {"type": "categorical", "name": "Gender", "categories": ["Female", "Male"]},
//!     {"type": "numeric", "name": "Age"}
//!   ],
//!   "base_score": 0.0,
//!   "trees": [
//!     {"nodes": [
//!       {"split": {"column": 2, "threshold": 22.5, "yes": 1, "no": 2}},
//!       {"leaf": {"value": -0.3}},
//!       {"leaf": {"value": 0.3}}
//!     ]}
//!   ]
//! }
//! ```
//!
//! Categorical features are one-hot expanded in the listed category order,
//! so the design matrix columns follow `features` with each categorical
//! feature contributing one column per category. The ensemble margin is the
//! log-odds of `classes[1]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub classes: Vec<String>,
    pub features: Vec<FeatureSpec>,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<TreeSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureSpec {
    Numeric { name: String },
    Categorical { name: String, categories: Vec<String> },
}

impl FeatureSpec {
    pub fn name(&self) -> &str {
        match self {
            FeatureSpec::Numeric { name } | FeatureSpec::Categorical { name, .. } => name,
        }
    }

    /// Number of design-matrix columns this feature expands to.
    #[cfg(test)]
    fn width(&self) -> usize {
        match self {
            FeatureSpec::Numeric { .. } => 1,
            FeatureSpec::Categorical { categories, .. } => categories.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    pub nodes: Vec<NodeSpec>,
}

/// Tree node. `yes` is taken when `row[column] < threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSpec {
    Split {
        column: usize,
        threshold: f64,
        yes: usize,
        no: usize,
    },
    Leaf {
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_example() {
        let json = r#"{
            "classes": ["not_predisposed", "predisposed"],
            "features": [
                {"type": "categorical", "name": "Gender", "categories": ["Female", "Male"]},
                {"type": "numeric", "name": "Age"}
            ],
            "base_score": 0.0,
            "trees": [
                {"nodes": [
                    {"split": {"column": 2, "threshold": 22.5, "yes": 1, "no": 2}},
                    {"leaf": {"value": -0.3}},
                    {"leaf": {"value": 0.3}}
                ]}
            ]
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.classes.len(), 2);
        assert_eq!(artifact.features[0].width(), 2);
        assert_eq!(artifact.features[1].name(), "Age");
        assert_eq!(
            artifact.trees[0].nodes[1],
            NodeSpec::Leaf { value: -0.3 }
        );
    }

    #[test]
    fn base_score_defaults_to_zero() {
        let json = r#"{"classes": ["a", "b"], "features": [], "trees": []}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.base_score, 0.0);
    }

    #[test]
    fn unknown_feature_type_is_rejected() {
        let json = r#"{"classes": ["a", "b"], "features": [{"type": "text", "name": "x"}], "trees": []}"#;
        assert!(serde_json::from_str::<ModelArtifact>(json).is_err());
    }
}
