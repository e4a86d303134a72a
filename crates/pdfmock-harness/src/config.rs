use std::path::Path;

use pdfmock_fetch::{CMapProvider, Provider, ProviderConfig};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};

/// Where test fixtures and auxiliary data live.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// pdfs_path = "fixtures/pdfs/"
/// cmap_packed = false
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory or URL prefix test PDFs are resolved against.
    pub pdfs_path: String,
    /// Base location of CMap files.
    pub cmap_url: Option<String>,
    /// Whether CMaps are packed `.bcmap` files.
    pub cmap_packed: bool,
    /// Base location of the standard font data.
    pub standard_font_data_url: Option<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            pdfs_path: "./test/pdfs/".into(),
            cmap_url: Some("./external/bcmaps/".into()),
            cmap_packed: true,
            standard_font_data_url: Some("./external/standard_fonts/".into()),
        }
    }
}

impl HarnessConfig {
    pub fn from_toml_str(s: &str) -> HarnessResult<Self> {
        toml::from_str(s).map_err(|e| HarnessError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// CMap backend for this config.
    pub fn cmap_provider(&self) -> CMapProvider {
        CMapProvider::new(self.cmap_url.clone(), self.cmap_packed)
    }

    /// Backend that can read the test PDFs: network for `http(s)` prefixes,
    /// filesystem otherwise. Document locations are already prefixed with
    /// `pdfs_path`, so neither backend gets a base of its own.
    pub fn document_provider(&self) -> HarnessResult<Provider> {
        let config = if is_http(&self.pdfs_path) {
            ProviderConfig::Network { base_url: None }
        } else {
            ProviderConfig::File { root: None }
        };
        Ok(Provider::from_config(&config)?)
    }
}

fn is_http(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
