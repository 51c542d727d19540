//! Shared registry of active notification placements.
//!
//! # Responsibility
//! - Define the registry contract used by placement and lifecycle code.
//! - Persist records durably so independent processes see each other.
//!
//! # Invariants
//! - Every read-modify-write cycle runs under an exclusive advisory lock.
//! - A present-but-unparseable registry file is an error for that operation,
//!   never silently treated as empty.

use crate::model::record::RecordValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod file_store;

pub use file_store::{FileRegistry, PlacementRegistry};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error for persistence and validation failures.
#[derive(Debug)]
pub enum RegistryError {
    /// Directory creation, file open/read/write or lock acquisition failed.
    Io(std::io::Error),
    /// The registry file exists but does not parse as a record sequence.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A record violated its invariants on a write or read path.
    Validation(RecordValidationError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "registry i/o failure: {err}"),
            Self::Malformed { path, source } => write!(
                f,
                "registry file `{}` is malformed: {source}",
                path.display()
            ),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RecordValidationError> for RegistryError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}
