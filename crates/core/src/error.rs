use crate::types::DbId;

/// Failure reported by a store-access implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The write violated a storage constraint (foreign key, unique key).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Any other failure of the underlying storage engine.
    #[error("Store fault: {0}")]
    Fault(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found with ID - {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
