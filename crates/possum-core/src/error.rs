use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unrecognised sex value: {0:?} (expected \"male\" or \"female\")")]
    UnknownSex(String),
}
