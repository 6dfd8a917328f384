use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
    #[error("invalid simulation state: {0}")]
    InvalidState(String),
    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),
}
