use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Category cycle detected at '{0}'")]
    CycleDetected(String),

    #[error("Duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
