use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("failed to decode post record: {0}")]
    Decode(#[from] serde_json::Error),
}
