use std::sync::Arc;

use async_trait::async_trait;
use pdfmock_types::{Ref, Value};

use crate::stats::XRefStats;

/// Cross-reference resolver.
///
/// All implementations must satisfy these invariants:
/// - Resolution of a known reference is deterministic: repeated calls return
///   the same `Arc` instance.
/// - An unknown reference resolves to `None`. This is a normal outcome
///   (the object is missing from storage), not an error.
/// - Non-reference values pass through `fetch_if_ref` untouched.
/// - The async methods have exactly the sync semantics; they differ only in
///   how completion is delivered. Backends that need I/O override them.
///
/// The trait is object-safe and `Send + Sync` so a resolver can be shared
/// as `Arc<dyn XRef>` across tasks.
#[async_trait]
pub trait XRef: Send + Sync {
    /// Look up a reference.
    fn fetch(&self, reference: Ref) -> Option<Arc<Value>>;

    /// Counters that code under test records into while walking objects.
    fn stats(&self) -> &XRefStats;

    /// Asynchronous lookup.
    ///
    /// Default implementation completes immediately with [`XRef::fetch`].
    async fn fetch_async(&self, reference: Ref) -> Option<Arc<Value>> {
        self.fetch(reference)
    }

    /// Resolve `value` if it is a reference, otherwise hand it back.
    fn fetch_if_ref(&self, value: &Arc<Value>) -> Option<Arc<Value>> {
        match value.as_reference() {
            Some(reference) => self.fetch(reference),
            None => Some(Arc::clone(value)),
        }
    }

    /// Asynchronous counterpart of [`XRef::fetch_if_ref`].
    async fn fetch_if_ref_async(&self, value: &Arc<Value>) -> Option<Arc<Value>> {
        match value.as_reference() {
            Some(reference) => self.fetch_async(reference).await,
            None => Some(Arc::clone(value)),
        }
    }
}
