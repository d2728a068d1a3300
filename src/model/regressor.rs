//! Skill level regression models loaded from serialized artifacts.
//!
//! A model artifact carries the exact feature-name sequence it was fitted
//! on; predictions are positional, so rows must match that sequence (the
//! alignment plan in `data::schema` guarantees this). Importance scores
//! are a capability of the model kind, not of every model.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillcastError};
use crate::model::tree::RegressionTree;

/// Linear model: `weights · features + intercept`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: Array1<f64>,
    pub intercept: f64,
}

/// Additive tree ensemble with per-feature importance scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostedModel {
    pub trees: Vec<RegressionTree>,
    pub base_score: f64,
    /// Importance per feature, aligned with the model's feature names.
    pub importances: Vec<f64>,
}

/// The supported model kinds. Only tree ensembles carry importances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModelKind {
    Linear(LinearModel),
    GradientBoosted(GradientBoostedModel),
}

/// A trained skill regressor plus the feature schema it was fitted on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillModel {
    feature_names: Vec<String>,
    kind: ModelKind,
}

impl SkillModel {
    pub fn new(feature_names: Vec<String>, kind: ModelKind) -> Result<Self> {
        let model = SkillModel {
            feature_names,
            kind,
        };
        model.validate()?;
        Ok(model)
    }

    /// The ordered feature-name sequence fixed at training time.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn num_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn kind(&self) -> &ModelKind {
        &self.kind
    }

    /// Per-feature importance scores, for model kinds that expose them.
    pub fn feature_importances(&self) -> Option<&[f64]> {
        match &self.kind {
            ModelKind::GradientBoosted(model) => Some(&model.importances),
            ModelKind::Linear(_) => None,
        }
    }

    /// Single-row inference. The row must have exactly one value per
    /// declared feature, in declaration order.
    pub fn predict(&self, features: &Array1<f64>) -> Result<f64> {
        if features.len() != self.feature_names.len() {
            return Err(SkillcastError::FeatureLength {
                expected: self.feature_names.len(),
                got: features.len(),
            });
        }
        Ok(match &self.kind {
            ModelKind::Linear(model) => model.weights.dot(features) + model.intercept,
            ModelKind::GradientBoosted(model) => {
                let row = features.to_vec();
                model.base_score
                    + model
                        .trees
                        .iter()
                        .map(|tree| tree.predict(&row))
                        .sum::<f64>()
            }
        })
    }

    /// Structural validation run on construction and after deserialization.
    pub fn validate(&self) -> Result<()> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err(SkillcastError::Model("no feature names declared".into()));
        }
        if self.feature_names.iter().any(String::is_empty) {
            return Err(SkillcastError::Model("empty feature name".into()));
        }
        {
            let mut seen: Vec<&str> = self.feature_names.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            if seen.len() != n {
                return Err(SkillcastError::Model("duplicate feature names".into()));
            }
        }
        match &self.kind {
            ModelKind::Linear(model) => {
                if model.weights.len() != n {
                    return Err(SkillcastError::Model(format!(
                        "{} weights for {} features",
                        model.weights.len(),
                        n
                    )));
                }
            }
            ModelKind::GradientBoosted(model) => {
                if model.importances.len() != n {
                    return Err(SkillcastError::Model(format!(
                        "{} importance scores for {} features",
                        model.importances.len(),
                        n
                    )));
                }
                if model.trees.is_empty() {
                    return Err(SkillcastError::Model("ensemble has no trees".into()));
                }
                for (i, tree) in model.trees.iter().enumerate() {
                    if !tree.is_well_formed() {
                        return Err(SkillcastError::Model(format!("tree {i} is malformed")));
                    }
                    if let Some(max) = tree.max_feature_index() {
                        if max as usize >= n {
                            return Err(SkillcastError::Model(format!(
                                "tree {i} references feature {max}, model has {n}"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tree::{Node, SplitCondition};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn feature_names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("f{i}")).collect()
    }

    fn linear_model() -> SkillModel {
        SkillModel::new(
            feature_names(3),
            ModelKind::Linear(LinearModel {
                weights: array![0.5, -1.0, 2.0],
                intercept: 1.25,
            }),
        )
        .unwrap()
    }

    fn boosted_model() -> SkillModel {
        let tree = RegressionTree::new(vec![
            Node::Split {
                condition: SplitCondition::new(0, 1.0),
                left: 1,
                right: 2,
            },
            Node::Leaf(0.5),
            Node::Leaf(1.5),
        ]);
        SkillModel::new(
            feature_names(2),
            ModelKind::GradientBoosted(GradientBoostedModel {
                trees: vec![tree.clone(), tree],
                base_score: 3.0,
                importances: vec![0.8, 0.2],
            }),
        )
        .unwrap()
    }

    #[test]
    fn linear_prediction_is_the_dot_product_plus_intercept() {
        let model = linear_model();
        let prediction = model.predict(&array![2.0, 1.0, 0.5]).unwrap();
        assert_abs_diff_eq!(prediction, 0.5 * 2.0 - 1.0 + 2.0 * 0.5 + 1.25);
    }

    #[test]
    fn boosted_prediction_sums_trees_over_base_score() {
        let model = boosted_model();
        assert_abs_diff_eq!(model.predict(&array![0.0, 0.0]).unwrap(), 3.0 + 0.5 + 0.5);
        assert_abs_diff_eq!(model.predict(&array![2.0, 0.0]).unwrap(), 3.0 + 1.5 + 1.5);
    }

    #[test]
    fn prediction_is_idempotent() {
        let model = boosted_model();
        let row = array![0.7, 0.1];
        assert_eq!(
            model.predict(&row).unwrap(),
            model.predict(&row).unwrap()
        );
    }

    #[test]
    fn importances_are_a_kind_capability() {
        assert!(linear_model().feature_importances().is_none());
        assert_eq!(
            boosted_model().feature_importances(),
            Some([0.8, 0.2].as_slice())
        );
    }

    #[test]
    fn wrong_row_width_is_an_error() {
        let err = linear_model().predict(&array![1.0]).unwrap_err();
        assert!(matches!(
            err,
            SkillcastError::FeatureLength {
                expected: 3,
                got: 1
            }
        ));
    }

    #[test]
    fn validation_rejects_mismatched_artifacts() {
        // Weight count disagrees with the feature names.
        let err = SkillModel::new(
            feature_names(2),
            ModelKind::Linear(LinearModel {
                weights: array![1.0],
                intercept: 0.0,
            }),
        )
        .unwrap_err();
        assert!(matches!(err, SkillcastError::Model(_)));

        // Tree references a feature the model does not declare.
        let tree = RegressionTree::new(vec![
            Node::Split {
                condition: SplitCondition::new(5, 1.0),
                left: 1,
                right: 2,
            },
            Node::Leaf(0.0),
            Node::Leaf(1.0),
        ]);
        let err = SkillModel::new(
            feature_names(2),
            ModelKind::GradientBoosted(GradientBoostedModel {
                trees: vec![tree],
                base_score: 0.0,
                importances: vec![0.5, 0.5],
            }),
        )
        .unwrap_err();
        assert!(matches!(err, SkillcastError::Model(_)));
    }
}
