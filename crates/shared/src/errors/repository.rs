use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not enough stock for {name}: requested {requested}, only {available} available")]
    InsufficientStock {
        name: String,
        requested: i32,
        available: i32,
    },

    #[error("Product {0} is sold per variant, a variant must be selected")]
    VariantRequired(String),

    #[error("Custom: {0}")]
    Custom(String),
}
