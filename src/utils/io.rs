//! Artifact (de)serialization.
//!
//! The model and encoder are bincode blobs written by the offline training
//! pipeline. Loading validates the artifact before handing it out, so a
//! corrupt or mismatched file fails at startup rather than at predict time.

use std::path::Path;

use crate::data::encoder::CategoryEncoder;
use crate::error::Result;
use crate::model::SkillModel;

pub fn load_model(path: &Path) -> Result<SkillModel> {
    let raw = std::fs::read(path)?;
    let model: SkillModel = bincode::deserialize(&raw)?;
    model.validate()?;
    Ok(model)
}

pub fn save_model(path: &Path, model: &SkillModel) -> Result<()> {
    let raw = bincode::serialize(model)?;
    std::fs::write(path, raw)?;
    Ok(())
}

pub fn load_encoder(path: &Path) -> Result<CategoryEncoder> {
    let raw = std::fs::read(path)?;
    let encoder: CategoryEncoder = bincode::deserialize(&raw)?;
    encoder.validate()?;
    Ok(encoder)
}

pub fn save_encoder(path: &Path, encoder: &CategoryEncoder) -> Result<()> {
    let raw = bincode::serialize(encoder)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearModel, ModelKind};
    use ndarray::array;

    #[test]
    fn model_round_trips_through_disk() {
        let model = SkillModel::new(
            vec!["Age".into(), "Training Hours".into()],
            ModelKind::Linear(LinearModel {
                weights: array![0.01, 0.002],
                intercept: 4.0,
            }),
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        save_model(&path, &model).unwrap();
        let loaded = load_model(&path).unwrap();

        let row = array![30.0, 100.0];
        assert_eq!(model.predict(&row).unwrap(), loaded.predict(&row).unwrap());
        assert_eq!(loaded.feature_names(), model.feature_names());
    }

    #[test]
    fn encoder_round_trips_through_disk() {
        let encoder =
            CategoryEncoder::new(vec![("Gender".into(), vec!["Male".into(), "Female".into()])])
                .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoder.bin");
        save_encoder(&path, &encoder).unwrap();
        let loaded = load_encoder(&path).unwrap();

        assert_eq!(loaded.feature_names_out(), encoder.feature_names_out());
        assert_eq!(
            loaded.transform(&[("Gender", "Female")]).unwrap(),
            vec![0.0, 1.0]
        );
    }

    #[test]
    fn corrupt_artifact_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"not a model").unwrap();
        assert!(load_model(&path).is_err());
    }
}
