use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("group '{group}' would generate {size} combinations (limit {limit})")]
    CombinationLimitExceeded {
        group: String,
        size: usize,
        limit: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
