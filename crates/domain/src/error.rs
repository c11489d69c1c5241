//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RestoMapError`]
//! via `From`. Storage failures are boxed so the domain stays free of IO crates.

/// Base error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum RestoMapError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A broken domain invariant or a rejected request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("country must not be empty")]
    EmptyCountry,

    #[error("address must not be empty")]
    EmptyAddress,

    #[error("identifier must be a positive integer")]
    InvalidId,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("one or more validation errors occurred")]
    Failures(Vec<FieldFailure>),
}

/// A single failed rule, attached to the request field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: &'static str,
    pub message: String,
}

impl FieldFailure {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Lookup of a record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A write rejected because other records still depend on the target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} is still referenced by {dependents}")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
    pub dependents: &'static str,
}
