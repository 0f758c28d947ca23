use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown template identifier: {0}")]
    UnknownTemplate(String),
    #[error("measure {measure_id} is configured more than once")]
    DuplicateMeasure { measure_id: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
