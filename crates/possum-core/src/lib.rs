pub mod error;
pub mod observation;
pub mod record;
pub mod schema;

pub use error::EncodeError;
pub use observation::RawObservation;
pub use record::FeatureRecord;
pub use schema::{FEATURE_COLUMNS, inference_schema};
