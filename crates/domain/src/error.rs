//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`, so callers only ever match on one enum.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// Input could not be turned into a valid domain value.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A record looked up by id does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// A write collided with an existing record.
    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// The storage layer failed. The source is kept opaque so the domain
    /// does not depend on any driver.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Structural problems with incoming data.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// A field was supplied but could not be parsed.
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    /// A path segment is not a valid record id.
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

/// A lookup by id found nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} does not exist.")]
pub struct NotFoundError {
    /// Human-readable kind of the missing record (`"Amenity"`, `"Place"`).
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: String,
}

/// Uniqueness violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConflictError {
    /// Another record of the same kind already carries this name.
    #[error("Name already exists")]
    DuplicateName { entity: &'static str, name: String },
}

impl ConflictError {
    /// Stable numeric code exposed to API clients.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::DuplicateName { .. } => 10003,
        }
    }
}
