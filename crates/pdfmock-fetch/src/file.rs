use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::resource::{Resource, ResourceDescriptor};
use crate::traits::ResourceProvider;

/// Local-filesystem backend.
///
/// Reads the whole file in one go. A zero-byte file is a failure: an empty
/// fixture almost always means a missing or truncated test file.
#[derive(Clone, Debug, Default)]
pub struct FileProvider {
    root: Option<PathBuf>,
}

impl FileProvider {
    /// Locations are used as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative locations are resolved against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn resolve(&self, location: &str) -> PathBuf {
        let path = Path::new(location);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl ResourceProvider for FileProvider {
    fn kind(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, descriptor: &ResourceDescriptor) -> FetchResult<Resource> {
        let path = self.resolve(descriptor.location());
        let data = tokio::fs::read(&path)
            .await
            .map_err(|source| FetchError::Io {
                path: path.clone(),
                source,
            })?;
        if data.is_empty() {
            return Err(FetchError::EmptyFile(path));
        }
        debug!(path = %path.display(), bytes = data.len(), "read file");
        Ok(Resource::Bytes(Bytes::from(data)))
    }
}
