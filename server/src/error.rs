//! Error handling.

use std::error::Error as StdError;

use anyhow::Error as AnyError;
use displaydoc::Display;

use depot::error::DepotError;

pub type ServerResult<T> = Result<T, ServerError>;

/// An error.
#[derive(Debug, Display)]
pub enum ServerError {
    /// The requested release file does not exist.
    NoSuchReleaseFile,

    /// The requested distribution does not exist.
    NoSuchDistribution,

    /// A release file with the same ident already exists in the release.
    ReleaseFileAlreadyExists,

    /// Database error: {0}
    DatabaseError(AnyError),

    /// Error from the common components.
    DepotError(DepotError),
}

impl ServerError {
    pub fn database_error(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::DatabaseError(AnyError::new(error))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NoSuchReleaseFile => "NoSuchReleaseFile",
            Self::NoSuchDistribution => "NoSuchDistribution",
            Self::ReleaseFileAlreadyExists => "ReleaseFileAlreadyExists",
            Self::DatabaseError(_) => "DatabaseError",
            Self::DepotError(e) => e.name(),
        }
    }
}

impl StdError for ServerError {}

impl From<DepotError> for ServerError {
    fn from(error: DepotError) -> Self {
        Self::DepotError(error)
    }
}
