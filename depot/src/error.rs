//! Error handling.

use std::error::Error as StdError;

use displaydoc::Display;

pub type DepotResult<T> = Result<T, DepotError>;

/// An error.
#[derive(Debug, Display)]
pub enum DepotError {
    /// Ident error: {0}
    IdentError(super::ident::Error),
}

impl DepotError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdentError(_) => "IdentError",
        }
    }
}

impl StdError for DepotError {}

impl From<super::ident::Error> for DepotError {
    fn from(error: super::ident::Error) -> Self {
        Self::IdentError(error)
    }
}
