//! Release file identifiers.
//!
//! Every file attached to a release is addressed by an ident derived
//! from its name and, when present, the name of the distribution
//! channel it is scoped to. Idents are unique within a release.


use std::fmt;
use std::str::FromStr;

use displaydoc::Display;
use serde::{de, ser, Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::error::{DepotError, DepotResult};

/// Separator between the name and the distribution name in the
/// digest input.
///
/// This keeps plain names apart from distribution-scoped ones by
/// convention only: a name may itself contain the separator, and
/// such inputs can collide across the boundary.
pub const DIST_SEPARATOR: &str = "@@";

/// The length of an ident rendered as hexadecimal.
pub const IDENT_HEX_LENGTH: usize = 40;

/// The derived identifier of a release file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseFileIdent([u8; 20]);

/// An ident parsing error.
#[derive(Debug, Display)]
pub enum Error {
    /// Invalid length for ident string: Must be {expected}, got {actual}.
    InvalidIdentLength { expected: usize, actual: usize },

    /// Invalid hexadecimal ident: {0}
    InvalidHexIdent(hex::FromHexError),

    /// Ident is not in lowercase hexadecimal.
    NotLowercase,
}

impl ReleaseFileIdent {
    /// Derives the identifier of a release file.
    ///
    /// The digest covers the UTF-8 bytes of the name alone, or of
    /// `{name}@@{distribution}` when the file is scoped to a
    /// distribution.
    pub fn derive(name: &str, distribution: Option<&str>) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(name.as_bytes());

        if let Some(distribution) = distribution {
            hasher.update(DIST_SEPARATOR.as_bytes());
            hasher.update(distribution.as_bytes());
        }

        Self(hasher.finalize().into())
    }

    /// Parses the hexadecimal representation of an ident.
    pub fn from_hex(s: &str) -> DepotResult<Self> {
        if s.len() != IDENT_HEX_LENGTH {
            return Err(Error::InvalidIdentLength {
                expected: IDENT_HEX_LENGTH,
                actual: s.len(),
            }
            .into());
        }

        // Stored idents are canonically lowercase.
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(Error::NotLowercase.into());
        }

        let v = hex::decode(s).map_err(Error::InvalidHexIdent)?;
        Ok(Self(v.try_into().unwrap()))
    }

    /// Returns the ident in hexadecimal format.
    ///
    /// This is the canonical representation of idents in the Depot
    /// database.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for ReleaseFileIdent {
    type Err = DepotError;

    fn from_str(s: &str) -> DepotResult<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ReleaseFileIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ReleaseFileIdent {
    /// Deserializes a hexadecimal ident string.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        use de::Error;

        String::deserialize(deserializer)
            .and_then(|s| Self::from_hex(&s).map_err(|e| Error::custom(e.to_string())))
    }
}

impl Serialize for ReleaseFileIdent {
    /// Serializes an ident into a hexadecimal string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}
