use std::path::PathBuf;

use crate::resource::CMapCompression;

/// Errors from resource acquisition.
///
/// Configuration errors (`MissingCMapBaseUrl`, `MissingCMapName`,
/// `InvalidConfig`) are raised before any I/O is attempted. Everything else
/// is an acquisition failure of a single request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The CMap backend was built without a base location.
    #[error(
        "the CMap base URL must be specified, ensure that the CMap URL and packed flag are provided"
    )]
    MissingCMapBaseUrl,

    /// A CMap was requested with an empty name.
    #[error("CMap name must be specified")]
    MissingCMapName,

    /// A provider configuration value is unusable.
    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),

    /// Reading a local file failed.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A local read succeeded but returned nothing.
    #[error("file is empty: {0}")]
    EmptyFile(PathBuf),

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A CMap could not be read. The underlying cause is logged, not kept.
    #[error("unable to load {}CMap at: {url}", binary_prefix(.compression))]
    CMapUnavailable {
        url: String,
        compression: CMapCompression,
    },
}

impl FetchError {
    /// Returns `true` for errors raised before any I/O was attempted.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingCMapBaseUrl | Self::MissingCMapName | Self::InvalidConfig(_)
        )
    }
}

fn binary_prefix(compression: &CMapCompression) -> &'static str {
    match compression {
        CMapCompression::Binary => "binary ",
        CMapCompression::None => "",
    }
}

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
