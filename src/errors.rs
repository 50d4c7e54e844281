use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
