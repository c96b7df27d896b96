use std::fmt::Display;

use models::errors::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    #[error("item {0} not found")]
    NotFound(i64),
    #[error("database error: {0}")]
    Backend(String),
}

impl ServiceError {
    pub fn backend(err: impl Display) -> Self { Self::Backend(err.to_string()) }
}
