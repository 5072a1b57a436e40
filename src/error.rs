use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON5 conversion failed: {0}")]
    Json5(#[from] json5::Error),

    #[error("XML formatting failed: {message}")]
    Xml { message: String },

    #[error("Unrecognized date string: {value}")]
    InvalidDate { value: String },
}

pub type Result<T> = std::result::Result<T, CommonError>;
