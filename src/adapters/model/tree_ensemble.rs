//! Gradient-boosted tree ensemble implementing the `Classifier` port.

use std::collections::HashSet;

use crate::domain::assessment::{FeatureValue, Field, SubjectRecord};
use crate::domain::foundation::DomainError;
use crate::ports::{ArtifactError, Classifier};

use super::artifact::{FeatureSpec, ModelArtifact, NodeSpec, TreeSpec};

/// One design matrix column.
#[derive(Debug, Clone, PartialEq)]
enum Column {
    Numeric(Field),
    OneHot(Field, String),
}

/// Binary logistic tree ensemble, validated against the questionnaire schema.
#[derive(Debug, Clone)]
pub struct TreeEnsembleClassifier {
    classes: Vec<String>,
    columns: Vec<Column>,
    base_score: f64,
    trees: Vec<TreeSpec>,
}

impl TreeEnsembleClassifier {
    /// Validates an artifact and builds the classifier.
    ///
    /// # Errors
    ///
    /// `ArtifactError::SchemaMismatch` when the feature list does not cover
    /// exactly the fifteen questionnaire fields with matching types and
    /// vocabularies, or when a tree is malformed.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ArtifactError> {
        if artifact.classes.len() != 2 {
            return Err(mismatch(format!(
                "expected 2 classes, found {}",
                artifact.classes.len()
            )));
        }
        if !artifact.base_score.is_finite() {
            return Err(mismatch("base_score must be finite"));
        }

        let columns = columns_for(&artifact.features)?;

        if artifact.trees.is_empty() {
            return Err(mismatch("ensemble has no trees"));
        }
        for (t, tree) in artifact.trees.iter().enumerate() {
            validate_tree(t, tree, columns.len())?;
        }

        Ok(Self {
            classes: artifact.classes,
            columns,
            base_score: artifact.base_score,
            trees: artifact.trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn design_row(&self, record: &SubjectRecord) -> Result<Vec<f64>, DomainError> {
        self.columns
            .iter()
            .map(|column| match column {
                Column::Numeric(field) => match record.value_of(*field) {
                    FeatureValue::Numeric(n) => Ok(n),
                    FeatureValue::Category(_) => Err(DomainError::classifier(format!(
                        "column {} expects a number",
                        field
                    ))),
                },
                Column::OneHot(field, category) => match record.value_of(*field) {
                    FeatureValue::Category(code) if code == category.as_str() => Ok(1.0),
                    FeatureValue::Category(_) => Ok(0.0),
                    FeatureValue::Numeric(_) => Err(DomainError::classifier(format!(
                        "column {} expects a category",
                        field
                    ))),
                },
            })
            .collect()
    }

    /// Log-odds of `classes[1]`.
    fn margin(&self, row: &[f64]) -> f64 {
        self.base_score + self.trees.iter().map(|tree| leaf_value(tree, row)).sum::<f64>()
    }
}

impl Classifier for TreeEnsembleClassifier {
    fn class_labels(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, record: &SubjectRecord) -> Result<Vec<f64>, DomainError> {
        let row = self.design_row(record)?;
        let margin = self.margin(&row);
        if !margin.is_finite() {
            return Err(DomainError::classifier("ensemble margin is not finite"));
        }
        let p = sigmoid(margin);
        Ok(vec![1.0 - p, p])
    }
}

fn columns_for(features: &[FeatureSpec]) -> Result<Vec<Column>, ArtifactError> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for feature in features {
        let field = Field::from_name(feature.name())
            .ok_or_else(|| mismatch(format!("unknown feature '{}'", feature.name())))?;
        if !seen.insert(field) {
            return Err(mismatch(format!("feature '{}' listed twice", field)));
        }

        match feature {
            FeatureSpec::Numeric { .. } => {
                if field.is_categorical() {
                    return Err(mismatch(format!("feature '{}' must be categorical", field)));
                }
                columns.push(Column::Numeric(field));
            }
            FeatureSpec::Categorical { categories, .. } => {
                if !field.is_categorical() {
                    return Err(mismatch(format!("feature '{}' must be numeric", field)));
                }
                if categories.is_empty() {
                    return Err(mismatch(format!("feature '{}' has no categories", field)));
                }
                let mut seen_codes = HashSet::new();
                for code in categories {
                    if !field.accepts_code(code) {
                        return Err(mismatch(format!(
                            "feature '{}' has unknown category '{}'",
                            field, code
                        )));
                    }
                    if !seen_codes.insert(code.as_str()) {
                        return Err(mismatch(format!(
                            "feature '{}' repeats category '{}'",
                            field, code
                        )));
                    }
                    columns.push(Column::OneHot(field, code.clone()));
                }
            }
        }
    }

    if let Some(missing) = Field::ALL.iter().find(|f| !seen.contains(*f)) {
        return Err(mismatch(format!("feature '{}' is missing", missing)));
    }

    Ok(columns)
}

fn validate_tree(t: usize, tree: &TreeSpec, n_columns: usize) -> Result<(), ArtifactError> {
    if tree.nodes.is_empty() {
        return Err(mismatch(format!("tree {} has no nodes", t)));
    }
    let n_nodes = tree.nodes.len();
    for (i, node) in tree.nodes.iter().enumerate() {
        match *node {
            NodeSpec::Split {
                column,
                threshold,
                yes,
                no,
            } => {
                if column >= n_columns {
                    return Err(mismatch(format!(
                        "tree {} node {} splits on column {} of {}",
                        t, i, column, n_columns
                    )));
                }
                if !threshold.is_finite() {
                    return Err(mismatch(format!("tree {} node {} has a non-finite threshold", t, i)));
                }
                // Children must point forward, which also rules out cycles.
                for child in [yes, no] {
                    if child <= i || child >= n_nodes {
                        return Err(mismatch(format!(
                            "tree {} node {} has invalid child {}",
                            t, i, child
                        )));
                    }
                }
            }
            NodeSpec::Leaf { value } => {
                if !value.is_finite() {
                    return Err(mismatch(format!("tree {} node {} has a non-finite leaf", t, i)));
                }
            }
        }
    }
    Ok(())
}

fn leaf_value(tree: &TreeSpec, row: &[f64]) -> f64 {
    let mut idx = 0;
    loop {
        match tree.nodes[idx] {
            NodeSpec::Leaf { value } => return value,
            NodeSpec::Split {
                column,
                threshold,
                yes,
                no,
            } => {
                idx = if row[column] < threshold { yes } else { no };
            }
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn mismatch(reason: impl Into<String>) -> ArtifactError {
    ArtifactError::SchemaMismatch(reason.into())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn categorical(name: &str, categories: &[&str]) -> FeatureSpec {
        FeatureSpec::Categorical {
            name: name.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn numeric(name: &str) -> FeatureSpec {
        FeatureSpec::Numeric {
            name: name.to_string(),
        }
    }

    /// The questionnaire schema; `family_history=yes` lands in column 4.
    pub fn questionnaire_features() -> Vec<FeatureSpec> {
        vec![
            categorical("Gender", &["Female", "Male"]),
            numeric("Age"),
            numeric("Height"),
            categorical("family_history", &["yes", "no"]),
            categorical("FAVC", &["yes", "no"]),
            numeric("FCVC"),
            numeric("NCP"),
            categorical("CAEC", &["no", "Sometimes", "Frequently", "Always"]),
            categorical("SMOKE", &["yes", "no"]),
            numeric("CH2O"),
            categorical("SCC", &["yes", "no"]),
            numeric("FAF"),
            numeric("TUE"),
            categorical("CALC", &["no", "Sometimes", "Frequently"]),
            categorical(
                "MTRANS",
                &["Public_Transportation", "Automobile", "Walking", "Bike", "Motorbike"],
            ),
        ]
    }

    /// One stump on `family_history=yes`: margin `no_history` without it,
    /// `with_history` with it.
    pub fn family_history_stump(no_history: f64, with_history: f64) -> ModelArtifact {
        ModelArtifact {
            classes: vec!["not_predisposed".to_string(), "predisposed".to_string()],
            features: questionnaire_features(),
            base_score: 0.0,
            trees: vec![TreeSpec {
                nodes: vec![
                    NodeSpec::Split {
                        column: 4,
                        threshold: 0.5,
                        yes: 1,
                        no: 2,
                    },
                    NodeSpec::Leaf { value: no_history },
                    NodeSpec::Leaf { value: with_history },
                ],
            }],
        }
    }
}
