//! Error types for cross-reference fixtures.
//!
//! Resolution never fails: an unknown reference is `None`. These errors
//! only come from building a table out of fixture data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an xref fixture.
#[derive(Debug, Error)]
pub enum XRefError {
    /// The fixture is not valid JSON or has the wrong shape.
    #[error("malformed xref fixture: {0}")]
    Fixture(String),

    /// The fixture file could not be read.
    #[error("cannot read xref fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for xref operations.
pub type Result<T> = std::result::Result<T, XRefError>;
