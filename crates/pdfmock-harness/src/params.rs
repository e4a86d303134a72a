use pdfmock_fetch::{CMapProvider, ResourceDescriptor};

use crate::config::HarnessConfig;

/// Overrides applied on top of the config-derived defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    pub cmap_url: Option<String>,
    pub cmap_packed: Option<bool>,
    pub standard_font_data_url: Option<String>,
    pub password: Option<String>,
}

/// Everything needed to open one test PDF.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentParams {
    pub url: String,
    pub cmap_url: Option<String>,
    pub cmap_packed: bool,
    pub standard_font_data_url: Option<String>,
    pub password: Option<String>,
}

impl DocumentParams {
    /// Request for the document bytes.
    pub fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor::new(self.url.clone())
    }

    /// CMap backend for this document.
    pub fn cmap_provider(&self) -> CMapProvider {
        CMapProvider::new(self.cmap_url.clone(), self.cmap_packed)
    }
}

/// Resolve `filename` against the fixture directory and apply `options`.
pub fn build_document_params(
    config: &HarnessConfig,
    filename: &str,
    options: DocumentOptions,
) -> DocumentParams {
    DocumentParams {
        url: format!("{}{}", config.pdfs_path, filename),
        cmap_url: options.cmap_url.or_else(|| config.cmap_url.clone()),
        cmap_packed: options.cmap_packed.unwrap_or(config.cmap_packed),
        standard_font_data_url: options
            .standard_font_data_url
            .or_else(|| config.standard_font_data_url.clone()),
        password: options.password,
    }
}
