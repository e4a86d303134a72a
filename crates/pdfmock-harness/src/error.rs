use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid harness config: {0}")]
    Config(String),

    #[error("cannot read harness config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed destination: {0}")]
    Destination(String),

    #[error("fetch error: {0}")]
    Fetch(#[from] pdfmock_fetch::FetchError),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
