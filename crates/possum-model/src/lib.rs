//! Inference layer: classifier capability trait, prediction dispatch, and the
//! feature-gated ONNX Runtime classifier.

mod classifier;
mod labels;
#[cfg(feature = "onnx")]
mod onnx;

pub use classifier::{Classifier, ClassifierError, Prediction, predict};
pub use labels::Population;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
