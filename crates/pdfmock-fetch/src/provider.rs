use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cmap::CMapProvider;
use crate::error::FetchResult;
use crate::file::FileProvider;
use crate::network::NetworkProvider;
use crate::resource::{Resource, ResourceDescriptor};
use crate::traits::ResourceProvider;

/// Backend selection, usually read from a TOML table:
///
/// ```toml
/// kind = "cmap"
/// base_url = "external/bcmaps/"
/// compressed = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderConfig {
    File {
        #[serde(default)]
        root: Option<PathBuf>,
    },
    Network {
        #[serde(default)]
        base_url: Option<String>,
    },
    #[serde(rename = "cmap")]
    CMap {
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        compressed: bool,
    },
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::File { root: None }
    }
}

/// The backend chosen at configuration time.
#[derive(Clone, Debug)]
pub enum Provider {
    File(FileProvider),
    Network(NetworkProvider),
    CMap(CMapProvider),
}

impl Provider {
    /// Build the backend a config names.
    ///
    /// A CMap config without a base URL still builds; the missing base is
    /// reported by the first fetch, before it touches the filesystem.
    pub fn from_config(config: &ProviderConfig) -> FetchResult<Self> {
        let provider = match config {
            ProviderConfig::File { root: None } => Self::File(FileProvider::new()),
            ProviderConfig::File { root: Some(root) } => {
                Self::File(FileProvider::with_root(root.clone()))
            }
            ProviderConfig::Network { base_url: None } => Self::Network(NetworkProvider::new()),
            ProviderConfig::Network {
                base_url: Some(base),
            } => Self::Network(NetworkProvider::with_base_url(base)?),
            ProviderConfig::CMap {
                base_url,
                compressed,
            } => Self::CMap(CMapProvider::new(base_url.clone(), *compressed)),
        };
        debug!(kind = provider.kind(), "configured resource provider");
        Ok(provider)
    }
}

#[async_trait]
impl ResourceProvider for Provider {
    fn kind(&self) -> &'static str {
        match self {
            Self::File(p) => p.kind(),
            Self::Network(p) => p.kind(),
            Self::CMap(p) => p.kind(),
        }
    }

    async fn fetch(&self, descriptor: &ResourceDescriptor) -> FetchResult<Resource> {
        match self {
            Self::File(p) => p.fetch(descriptor).await,
            Self::Network(p) => p.fetch(descriptor).await,
            Self::CMap(p) => p.fetch(descriptor).await,
        }
    }
}
