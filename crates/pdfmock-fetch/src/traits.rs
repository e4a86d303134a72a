use async_trait::async_trait;

use crate::error::FetchResult;
use crate::resource::{Resource, ResourceDescriptor};

/// Byte/resource acquisition backend.
///
/// Each call is single-shot: at most one I/O operation, no retry, no
/// timeout, no cancellation. Implementations hold no per-call state, so
/// concurrent fetches need no coordination.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Short backend name for logs ("file", "network", "cmap").
    fn kind(&self) -> &'static str;

    /// Acquire the resource named by `descriptor`.
    async fn fetch(&self, descriptor: &ResourceDescriptor) -> FetchResult<Resource>;
}
