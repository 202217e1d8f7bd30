use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Donor query failed: {0}")]
    QueryFailure(#[from] RegistryError),

    #[error("Failed to render results: {0}")]
    RenderFailure(#[from] RenderError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Failures raised by a donor registry adapter.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("malformed donor row: {0}")]
    MalformedRow(String),

    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// Failures raised by a display surface.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("display surface is no longer attached")]
    Detached,

    #[error("display surface rejected the operation: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, DonorError>;
