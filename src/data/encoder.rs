//! Fitted categorical encoder with a stable, named output schema.
//!
//! The encoder is fitted offline alongside the model and shipped as a
//! serialized artifact. Output columns are named `{field}_{category}` in
//! fitted field order, then fitted category order.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillcastError};

/// One categorical field with its fitted category vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedField {
    pub name: String,
    pub categories: Vec<String>,
}

/// One-hot encoder over a fixed set of categorical fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEncoder {
    fields: Vec<FittedField>,
}

impl CategoryEncoder {
    /// Build an encoder from `(field, categories)` pairs.
    pub fn new(fields: Vec<(String, Vec<String>)>) -> Result<Self> {
        let encoder = CategoryEncoder {
            fields: fields
                .into_iter()
                .map(|(name, categories)| FittedField { name, categories })
                .collect(),
        };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Reject artifacts that cannot produce a usable output schema.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(SkillcastError::Schema(
                "encoder artifact declares no categorical fields".into(),
            ));
        }
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(SkillcastError::Schema("encoder field with empty name".into()));
            }
            if field.categories.is_empty() {
                return Err(SkillcastError::Schema(format!(
                    "encoder field {:?} has no categories",
                    field.name
                )));
            }
        }
        let mut names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.fields.len() {
            return Err(SkillcastError::Schema("duplicate encoder field names".into()));
        }
        Ok(())
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Column names of the encoded output, in output order.
    pub fn feature_names_out(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|f| {
                f.categories
                    .iter()
                    .map(move |c| format!("{}_{}", f.name, c))
            })
            .collect()
    }

    pub fn output_width(&self) -> usize {
        self.fields.iter().map(|f| f.categories.len()).sum()
    }

    /// Encode one record of `(field, value)` pairs into a one-hot row
    /// aligned with [`feature_names_out`](Self::feature_names_out).
    ///
    /// Fields may arrive in any order, but every fitted field must be
    /// present and every value must be in the fitted vocabulary.
    pub fn transform(&self, record: &[(&str, &str)]) -> Result<Vec<f64>> {
        let mut out = Vec::with_capacity(self.output_width());
        for field in &self.fields {
            let value = record
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| *value)
                .ok_or_else(|| SkillcastError::MissingField(field.name.clone()))?;
            let hot = field
                .categories
                .iter()
                .position(|c| c == value)
                .ok_or_else(|| SkillcastError::UnknownCategory {
                    field: field.name.clone(),
                    value: value.to_string(),
                })?;
            for i in 0..field.categories.len() {
                out.push(if i == hot { 1.0 } else { 0.0 });
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> CategoryEncoder {
        CategoryEncoder::new(vec![
            (
                "Gender".into(),
                vec!["Male".into(), "Female".into(), "Other".into()],
            ),
            (
                "Skill Category".into(),
                vec!["Communication".into(), "Technical".into()],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn output_names_follow_field_then_category_order() {
        assert_eq!(
            encoder().feature_names_out(),
            vec![
                "Gender_Male",
                "Gender_Female",
                "Gender_Other",
                "Skill Category_Communication",
                "Skill Category_Technical",
            ]
        );
    }

    #[test]
    fn transform_one_hots_each_field() {
        let row = encoder()
            .transform(&[("Gender", "Female"), ("Skill Category", "Technical")])
            .unwrap();
        assert_eq!(row, vec![0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn transform_accepts_fields_in_any_order() {
        let row = encoder()
            .transform(&[("Skill Category", "Communication"), ("Gender", "Male")])
            .unwrap();
        assert_eq!(row, vec![1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = encoder()
            .transform(&[("Gender", "Unknown"), ("Skill Category", "Technical")])
            .unwrap_err();
        assert!(matches!(
            err,
            SkillcastError::UnknownCategory { ref field, .. } if field == "Gender"
        ));
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = encoder().transform(&[("Gender", "Male")]).unwrap_err();
        assert!(matches!(err, SkillcastError::MissingField(ref f) if f == "Skill Category"));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        assert!(CategoryEncoder::new(vec![("Gender".into(), vec![])]).is_err());
        assert!(CategoryEncoder::new(vec![]).is_err());
    }
}
