//! Prediction dispatch over an externally-loaded classifier.
//!
//! The classifier artifact is loaded once at startup and shared read-only;
//! dispatch wraps one [`FeatureRecord`] in a single-row Arrow batch, invokes
//! the classifier, and maps the first class index to a [`Population`] label.
//!
//! Only [`ClassifierError::InvalidInput`] is recovered here — a malformed or
//! schema-mismatched record becomes a [`Prediction::Rejected`] carrying the
//! classifier's own message, and the host keeps running. Every other failure
//! propagates as a fatal error.

use arrow::record_batch::RecordBatch;
use thiserror::Error;

use possum_core::FeatureRecord;

use crate::labels::Population;

/// A ready-to-use classifier over the fixed inference schema.
///
/// Prediction is a logical read over the artifact's learned parameters; the
/// receiver is `&mut` only because inference runtimes scratch over internal
/// buffers between calls.
pub trait Classifier {
    /// Predict one class index per input row.
    fn predict_classes(&mut self, batch: &RecordBatch) -> Result<Vec<i64>, ClassifierError>;
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The classifier rejected the input (schema mismatch, malformed values).
    /// Recoverable: dispatch converts this into [`Prediction::Rejected`].
    #[error("classifier rejected input: {0}")]
    InvalidInput(String),

    /// Inference itself failed. Not recovered; treated as fatal upstream.
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Outcome of one dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// The classifier produced a class index.
    Population(Population),
    /// The classifier rejected the record; the message is user-visible.
    Rejected(String),
}

/// Dispatch a single assembled record to the classifier.
///
/// Stateless and retry-free: each call is one single-row batch. An empty
/// class vector from the classifier is a contract violation and is fatal.
pub fn predict<C: Classifier>(classifier: &mut C, record: &FeatureRecord) -> anyhow::Result<Prediction> {
    let batch = record.to_record_batch()?;

    match classifier.predict_classes(&batch) {
        Ok(classes) => {
            let index = classes
                .first()
                .copied()
                .ok_or_else(|| anyhow::anyhow!("classifier returned no class for a 1-row batch"))?;
            Ok(Prediction::Population(Population::from_class_index(index)))
        }
        Err(ClassifierError::InvalidInput(msg)) => Ok(Prediction::Rejected(msg)),
        Err(err @ ClassifierError::Inference(_)) => Err(err.into()),
    }
}
