//! ONNX Runtime classifier for the exported possum model.
//!
//! Loads a gradient-boosted classifier exported to ONNX (13 Float32 inputs,
//! int64 class labels as the first output). The artifact is loaded once at
//! startup; each prediction flattens a batch over the fixed inference schema
//! into a `[rows, 13]` tensor and reads back one class index per row.

use std::path::Path;

use arrow::array::Float32Array;
use arrow::record_batch::RecordBatch;
use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use possum_core::schema::{FEATURE_COLUMNS, inference_schema};

use crate::classifier::{Classifier, ClassifierError};

/// Possum population classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    session: Session,
    input_name: String,
}

impl OnnxClassifier {
    /// Load the model artifact from an `.onnx` file.
    ///
    /// A missing or unreadable artifact is a startup failure, not a
    /// per-request one.
    pub fn load(model_path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(
            model_path.exists(),
            "model artifact not found: {model_path:?}"
        );

        let session = Session::builder()?.commit_from_file(model_path)?;

        anyhow::ensure!(
            !session.inputs().is_empty(),
            "model has no inputs: {model_path:?}"
        );
        let input_name = session.inputs()[0].name().to_string();

        info!(
            input = %input_name,
            columns = FEATURE_COLUMNS.len(),
            model = %model_path.display(),
            "loaded classifier artifact"
        );
        Ok(Self {
            session,
            input_name,
        })
    }

    /// Flatten a schema-checked batch into row-major `[rows * 13]` values.
    fn flatten(batch: &RecordBatch) -> Result<Vec<f32>, ClassifierError> {
        let rows = batch.num_rows();
        let cols = batch.num_columns();
        let mut data = vec![0.0f32; rows * cols];

        for (c, column) in batch.columns().iter().enumerate() {
            let values = column
                .as_any()
                .downcast_ref::<Float32Array>()
                .ok_or_else(|| {
                    ClassifierError::InvalidInput(format!(
                        "column {:?} is not Float32",
                        batch.schema().field(c).name()
                    ))
                })?;
            for r in 0..rows {
                data[r * cols + c] = values.value(r);
            }
        }

        Ok(data)
    }
}

impl Classifier for OnnxClassifier {
    fn predict_classes(&mut self, batch: &RecordBatch) -> Result<Vec<i64>, ClassifierError> {
        check_schema(batch)?;

        let rows = batch.num_rows();
        let data = Self::flatten(batch)?;

        let shape = [rows as i64, FEATURE_COLUMNS.len() as i64];
        let tensor = Tensor::from_array((shape, data.into_boxed_slice()))
            .map_err(|e| ClassifierError::InvalidInput(format!("building input tensor: {e}")))?;

        // First output of the exported model is the int64 label tensor.
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => tensor])
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let (out_shape, labels) = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::Inference(format!("extracting labels: {e}")))?;

        let dims: &[i64] = out_shape;
        if dims.first().copied() != Some(rows as i64) {
            return Err(ClassifierError::Inference(format!(
                "unexpected label shape {dims:?} for {rows} input rows"
            )));
        }

        Ok(labels.to_vec())
    }
}

/// Check a batch against the training-time schema.
///
/// Column names, order, and types must match exactly; the model was trained
/// positionally and a reordered batch would silently predict garbage.
fn check_schema(batch: &RecordBatch) -> Result<(), ClassifierError> {
    let expected = inference_schema();
    let actual = batch.schema();

    if actual.fields().len() != expected.fields().len() {
        return Err(ClassifierError::InvalidInput(format!(
            "expected {} feature columns, got {}",
            expected.fields().len(),
            actual.fields().len()
        )));
    }

    for (i, (exp, act)) in expected
        .fields()
        .iter()
        .zip(actual.fields().iter())
        .enumerate()
    {
        if exp.name() != act.name() || exp.data_type() != act.data_type() {
            return Err(ClassifierError::InvalidInput(format!(
                "column {i} mismatch: expected {} ({}), got {} ({})",
                exp.name(),
                exp.data_type(),
                act.name(),
                act.data_type()
            )));
        }
    }

    Ok(())
}
