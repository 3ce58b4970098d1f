use thiserror::Error;

use crate::dog::repository::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Path id did not convert to a number.
    #[error("id should be a number")]
    InvalidId,
    /// Payload failed validation; one message per problem.
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
}
