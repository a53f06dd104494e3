//! Schema-ordered feature records for the trained classifier.
//!
//! A [`FeatureRecord`] is derived deterministically from one
//! [`RawObservation`]: the sex string is encoded to {0, 1}, the site and the
//! nine continuous measurements are copied unchanged, and the two placeholder
//! columns (`case`, `Pop`) are injected as zero. The record converts to a
//! single-row Arrow batch over [`inference_schema`] for dispatch.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float32Array};
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::observation::RawObservation;
use crate::schema::{FEATURE_COLUMNS, inference_schema};

/// Sex encoding in the trained schema: male = 1, female = 0.
const SEX_MALE: f32 = 1.0;
const SEX_FEMALE: f32 = 0.0;

/// One row in the classifier's training-time schema.
///
/// Field order here mirrors [`FEATURE_COLUMNS`]; `case` and `pop` are the
/// placeholder columns and are always zero. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub case: f32,
    pub site: f32,
    #[serde(rename = "Pop")]
    pub pop: f32,
    pub sex: f32,
    pub hdlngth: f32,
    pub skullw: f32,
    pub totlngth: f32,
    pub taill: f32,
    pub footlgth: f32,
    pub earconch: f32,
    pub eye: f32,
    pub chest: f32,
    pub belly: f32,
}

impl FeatureRecord {
    /// Assemble a schema-ordered record from raw measurements.
    ///
    /// Pure function of its input. Fails with [`EncodeError::UnknownSex`] if
    /// the sex string is outside the recognised two-value set; the binary
    /// encoding has no meaningful value for anything else.
    pub fn assemble(obs: &RawObservation) -> Result<Self, EncodeError> {
        let sex = match obs.sex.as_str() {
            "male" => SEX_MALE,
            "female" => SEX_FEMALE,
            other => return Err(EncodeError::UnknownSex(other.to_string())),
        };

        Ok(Self {
            case: 0.0,
            site: obs.site as f32,
            pop: 0.0,
            sex,
            hdlngth: obs.hdlngth,
            skullw: obs.skullw,
            totlngth: obs.totlngth,
            taill: obs.taill,
            footlgth: obs.footlgth,
            earconch: obs.earconch,
            eye: obs.eye,
            chest: obs.chest,
            belly: obs.belly,
        })
    }

    /// Values in training-column order, one per [`FEATURE_COLUMNS`] entry.
    pub fn to_row(&self) -> [f32; FEATURE_COLUMNS.len()] {
        [
            self.case,
            self.site,
            self.pop,
            self.sex,
            self.hdlngth,
            self.skullw,
            self.totlngth,
            self.taill,
            self.footlgth,
            self.earconch,
            self.eye,
            self.chest,
            self.belly,
        ]
    }

    /// Build a single-row Arrow batch over [`inference_schema`].
    pub fn to_record_batch(&self) -> Result<RecordBatch, arrow::error::ArrowError> {
        let columns: Vec<ArrayRef> = self
            .to_row()
            .iter()
            .map(|&v| Arc::new(Float32Array::from(vec![v])) as ArrayRef)
            .collect();

        RecordBatch::try_new(Arc::new(inference_schema()), columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;

    fn female_observation() -> RawObservation {
        RawObservation {
            sex: "female".to_string(),
            ..RawObservation::default()
        }
    }

    #[test]
    fn assemble_injects_placeholder_columns() {
        let record = FeatureRecord::assemble(&RawObservation::default()).unwrap();
        assert_eq!(record.case, 0.0);
        assert_eq!(record.pop, 0.0);
    }

    #[test]
    fn assemble_encodes_male_as_one() {
        let record = FeatureRecord::assemble(&RawObservation::default()).unwrap();
        assert_eq!(record.sex, 1.0);
    }

    #[test]
    fn assemble_encodes_female_as_zero() {
        let record = FeatureRecord::assemble(&female_observation()).unwrap();
        assert_eq!(record.sex, 0.0);
    }

    #[test]
    fn assemble_rejects_unknown_sex() {
        let obs = RawObservation {
            sex: "unknown".to_string(),
            ..RawObservation::default()
        };
        let err = FeatureRecord::assemble(&obs).unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn assemble_is_deterministic() {
        let obs = female_observation();
        let a = FeatureRecord::assemble(&obs).unwrap();
        let b = FeatureRecord::assemble(&obs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn site_boundaries_pass_through_unchanged() {
        for site in [0, 7] {
            let obs = RawObservation {
                site,
                ..RawObservation::default()
            };
            let record = FeatureRecord::assemble(&obs).unwrap();
            assert_eq!(record.site, site as f32);
        }
    }

    #[test]
    fn row_matches_training_column_order() {
        let obs = RawObservation {
            site: 1,
            sex: "female".to_string(),
            hdlngth: 95.0,
            skullw: 55.0,
            totlngth: 900.0,
            taill: 360.0,
            footlgth: 80.0,
            earconch: 45.0,
            eye: 15.0,
            chest: 180.0,
            belly: 140.0,
        };
        let row = FeatureRecord::assemble(&obs).unwrap().to_row();

        // case, site, Pop, sex, then the nine measurements.
        let expected = [
            0.0, 1.0, 0.0, 0.0, 95.0, 55.0, 900.0, 360.0, 80.0, 45.0, 15.0, 180.0, 140.0,
        ];
        assert_eq!(row, expected);
        assert_eq!(row.len(), FEATURE_COLUMNS.len());
    }

    #[test]
    fn record_batch_is_single_row_in_schema_order() {
        let record = FeatureRecord::assemble(&female_observation()).unwrap();
        let batch = record.to_record_batch().unwrap();

        assert_eq!(batch.num_rows(), 1);
        assert_eq!(batch.num_columns(), 13);
        assert_eq!(batch.schema().as_ref(), &inference_schema());

        let row = record.to_row();
        for (i, expected) in row.iter().enumerate() {
            let col = batch
                .column(i)
                .as_any()
                .downcast_ref::<Float32Array>()
                .unwrap();
            assert!(!col.is_null(0));
            assert_eq!(col.value(0), *expected, "column {i} mismatch");
        }
    }
}
