//! Arrow schema definitions for possum classifier inference.
//!
//! The column set and ordering are fixed by the training-time schema of the
//! shipped model artifact. `case` and `Pop` are placeholder columns carried
//! only for positional compatibility; they are always zero at inference time.
//! This module is versioned alongside the artifact: if the model is retrained
//! with a different column layout, the constant changes with it.

use arrow::datatypes::{DataType, Field, Schema};

/// Feature column names in training order.
pub const FEATURE_COLUMNS: [&str; 13] = [
    "case", "site", "Pop", "sex", "hdlngth", "skullw", "totlngth", "taill", "footlgth", "earconch",
    "eye", "chest", "belly",
];

/// Schema for single-row inference batches: 13 non-nullable Float32 columns
/// in training order.
pub fn inference_schema() -> Schema {
    Schema::new(
        FEATURE_COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Float32, false))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_schema_has_expected_fields() {
        let schema = inference_schema();
        assert_eq!(schema.fields().len(), 13);
        assert!(schema.field_with_name("case").is_ok());
        assert!(schema.field_with_name("Pop").is_ok());
        assert!(schema.field_with_name("belly").is_ok());
    }

    #[test]
    fn inference_schema_preserves_training_order() {
        let schema = inference_schema();
        for (i, name) in FEATURE_COLUMNS.iter().enumerate() {
            assert_eq!(schema.field(i).name(), name, "column {i} out of order");
        }
        // Placeholder columns sit at their trained positions.
        assert_eq!(schema.field(0).name(), "case");
        assert_eq!(schema.field(2).name(), "Pop");
    }

    #[test]
    fn inference_schema_all_float32_non_null() {
        let schema = inference_schema();
        for field in schema.fields() {
            assert_eq!(field.data_type(), &DataType::Float32);
            assert!(!field.is_nullable());
        }
    }
}
