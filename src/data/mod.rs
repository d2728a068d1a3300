//! Data handling: the reference dataset, the fitted encoder, and the
//! assembly of model input rows.

pub mod dataset;
pub mod encoder;
pub mod schema;

use ndarray::Array1;

use crate::error::Result;
use crate::form::InputRecord;
use self::encoder::CategoryEncoder;
use self::schema::AlignmentPlan;

/// Transform one form submission into a model input row.
///
/// Encodes the categorical fields, concatenates the numeric fields, and
/// assembles the columns in the model's expected order via the plan.
pub fn build_features(
    record: &InputRecord,
    encoder: &CategoryEncoder,
    plan: &AlignmentPlan,
) -> Result<Array1<f64>> {
    let encoded = encoder.transform(&record.categorical_values())?;
    plan.align(&record.numeric_values(), &encoded)
}
