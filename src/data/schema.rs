//! Reconciles live-encoded input against the model's training-time schema.
//!
//! The model predicts positionally, so the input row must match the
//! training-time column set and order exactly. The reconciliation is
//! precomputed once at startup into an [`AlignmentPlan`]; schema drift
//! between the model and encoder artifacts surfaces here, before the
//! first submission, instead of as a silently wrong prediction.

use ndarray::Array1;
use tracing::{debug, warn};

use crate::error::{Result, SkillcastError};

/// Numeric form fields, in the order they precede the encoded columns.
pub const NUMERIC_FIELDS: [&str; 6] = [
    "Age",
    "Initial Skill Level",
    "Training Hours",
    "Confidence Level",
    "Feedback Score",
    "Activity Participation",
];

/// Categorical form fields handled by the fitted encoder.
pub const CATEGORICAL_FIELDS: [&str; 4] = [
    "Gender",
    "Education Level",
    "Profession",
    "Skill Category",
];

/// Where one model input column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeatureSource {
    /// Index into the numeric field values.
    Numeric(usize),
    /// Index into the encoder's output row.
    Encoded(usize),
    /// Column the input cannot produce; filled with constant zero.
    Zero,
}

/// Precomputed mapping from the model's expected column order onto the
/// numeric and encoded inputs.
#[derive(Debug, Clone)]
pub struct AlignmentPlan {
    expected: Vec<String>,
    sources: Vec<FeatureSource>,
    numeric_len: usize,
    encoded_len: usize,
}

impl AlignmentPlan {
    /// Build the plan for a model expecting `expected` columns, given the
    /// numeric field names and the encoder's output names.
    ///
    /// Fails when the model declares no features, declares a column twice,
    /// or shares no columns at all with the available inputs (a wrong
    /// artifact pairing).
    pub fn new(expected: &[String], numeric: &[&str], encoded: &[String]) -> Result<Self> {
        if expected.is_empty() {
            return Err(SkillcastError::Schema(
                "model declares no input features".into(),
            ));
        }
        {
            let mut seen: Vec<&str> = expected.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            if seen.len() != expected.len() {
                return Err(SkillcastError::Schema(
                    "model declares duplicate feature names".into(),
                ));
            }
        }

        let mut sources = Vec::with_capacity(expected.len());
        let mut zero_filled = Vec::new();
        for name in expected {
            if let Some(i) = numeric.iter().position(|n| n == name) {
                sources.push(FeatureSource::Numeric(i));
            } else if let Some(i) = encoded.iter().position(|n| n == name) {
                sources.push(FeatureSource::Encoded(i));
            } else {
                sources.push(FeatureSource::Zero);
                zero_filled.push(name.as_str());
            }
        }

        if zero_filled.len() == expected.len() {
            return Err(SkillcastError::Schema(format!(
                "none of the {} expected model features match the numeric or \
                 encoded inputs; the model and encoder artifacts are not a pair",
                expected.len()
            )));
        }
        if !zero_filled.is_empty() {
            warn!(
                columns = ?zero_filled,
                "model expects columns the input cannot produce; filling with zero"
            );
        }

        let dropped: Vec<&str> = numeric
            .iter()
            .copied()
            .chain(encoded.iter().map(String::as_str))
            .filter(|name| !expected.iter().any(|e| e == name))
            .collect();
        if !dropped.is_empty() {
            // The model never sees a superset of its training-time columns.
            debug!(columns = ?dropped, "input columns not expected by the model are dropped");
        }

        Ok(AlignmentPlan {
            expected: expected.to_vec(),
            sources,
            numeric_len: numeric.len(),
            encoded_len: encoded.len(),
        })
    }

    /// Column names of the assembled row, identical to the model's
    /// expected-feature sequence.
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    /// Names that will be zero-filled on every submission.
    pub fn zero_filled(&self) -> Vec<&str> {
        self.sources
            .iter()
            .zip(&self.expected)
            .filter(|(source, _)| matches!(source, FeatureSource::Zero))
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Assemble one model input row, columns exactly in the expected order.
    pub fn align(&self, numeric: &[f64], encoded: &[f64]) -> Result<Array1<f64>> {
        if numeric.len() != self.numeric_len {
            return Err(SkillcastError::FeatureLength {
                expected: self.numeric_len,
                got: numeric.len(),
            });
        }
        if encoded.len() != self.encoded_len {
            return Err(SkillcastError::FeatureLength {
                expected: self.encoded_len,
                got: encoded.len(),
            });
        }
        let values = self
            .sources
            .iter()
            .map(|source| match source {
                FeatureSource::Numeric(i) => numeric[*i],
                FeatureSource::Encoded(i) => encoded[*i],
                FeatureSource::Zero => 0.0,
            })
            .collect::<Vec<f64>>();
        Ok(Array1::from_vec(values))
    }
}
