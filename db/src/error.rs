use sea_orm::DbErr;

/// Failures of the authoring and submission operations.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// The named record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    /// Input that is well-formed JSON but breaks a domain rule.
    #[error("{0}")]
    Invalid(String),

    #[error("Database error: {0}")]
    Store(#[from] DbErr),
}
