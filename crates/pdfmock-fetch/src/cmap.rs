use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::resource::{CMapCompression, CMapData, Resource, ResourceDescriptor};
use crate::traits::ResourceProvider;

/// Suffix of packed binary CMap files.
pub const BCMAP_SUFFIX: &str = ".bcmap";

/// CMap backend: reads `base_url + name` (plus `.bcmap` when packed).
///
/// The base location is required. Its absence, like an empty name, is a
/// configuration error reported before any read is attempted.
///
/// Only local files are read. An `http(s)` base is not fetched over the
/// network; every name under it comes back as `CMapUnavailable`, with a debug
/// line pointing at the remote base.
#[derive(Clone, Debug, Default)]
pub struct CMapProvider {
    base_url: Option<String>,
    compressed: bool,
}

impl CMapProvider {
    pub fn new(base_url: Option<String>, compressed: bool) -> Self {
        Self {
            base_url,
            compressed,
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn compression(&self) -> CMapCompression {
        if self.compressed {
            CMapCompression::Binary
        } else {
            CMapCompression::None
        }
    }

    /// Location a CMap name maps to, after the configuration checks.
    pub fn url_for(&self, name: &str) -> FetchResult<String> {
        let base = self
            .base_url
            .as_deref()
            .filter(|b| !b.is_empty())
            .ok_or(FetchError::MissingCMapBaseUrl)?;
        if name.is_empty() {
            return Err(FetchError::MissingCMapName);
        }
        let suffix = if self.compressed { BCMAP_SUFFIX } else { "" };
        Ok(format!("{base}{name}{suffix}"))
    }
}

#[async_trait]
impl ResourceProvider for CMapProvider {
    fn kind(&self) -> &'static str {
        "cmap"
    }

    async fn fetch(&self, descriptor: &ResourceDescriptor) -> FetchResult<Resource> {
        let url = self.url_for(descriptor.location())?;
        let compression = self.compression();

        let data = match tokio::fs::read(&url).await {
            Ok(data) if !data.is_empty() => data,
            Ok(_) => {
                debug!(%url, "CMap file is empty");
                return Err(FetchError::CMapUnavailable { url, compression });
            }
            Err(cause) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    debug!(%url, "CMap base is remote; only local CMap files are read");
                }
                debug!(%url, error = %cause, "CMap read failed");
                return Err(FetchError::CMapUnavailable { url, compression });
            }
        };

        Ok(Resource::CMap(CMapData {
            data: Bytes::from(data),
            compression,
        }))
    }
}
