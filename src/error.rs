use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error(".env file not found at: {}", .0.display())]
    EnvFileNotFound(PathBuf),
    #[error("one or more package-lock updates failed")]
    LockfileRefresh,
}
