use shared::error::AppError;
use thiserror::Error;

/// Start-up and serve failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database initialization failed: {0}")]
    Database(#[from] AppError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
