use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestgatesError {
    #[error("epics.md not found under {}", root.display())]
    EpicsNotFound { root: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TestgatesError>;
