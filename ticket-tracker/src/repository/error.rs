#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("storage error: {0}")]
    Storage(#[from] local_storage::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
