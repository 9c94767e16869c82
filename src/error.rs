use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Invalid formulation: {0}")]
    InvalidFormulation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LabelError>;
