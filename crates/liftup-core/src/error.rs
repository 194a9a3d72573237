use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiftupError {
    #[error("storage read failed: {0}")]
    StorageRead(String),

    #[error("storage write failed: {0}")]
    StorageWrite(String),
}
