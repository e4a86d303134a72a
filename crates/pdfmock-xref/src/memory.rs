//! In-memory cross-reference table for tests.
//!
//! [`XRefMock`] is built once from a fixed list of `(reference, value)`
//! pairs and never written afterwards. It is the zero-latency,
//! always-present special case of the engine's resolver: swapping one for
//! the other must not change any call site.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};

use pdfmock_types::{Ref, Value};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, XRefError};
use crate::stats::XRefStats;
use crate::traits::XRef;

/// One `(reference, value)` pair of fixture input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XRefEntry {
    #[serde(rename = "ref")]
    pub reference: Ref,
    pub data: Value,
}

impl XRefEntry {
    pub fn new(reference: Ref, data: impl Into<Value>) -> Self {
        Self {
            reference,
            data: data.into(),
        }
    }
}

/// Fixed in-memory implementation of [`XRef`].
///
/// Duplicate references in the input are not rejected: the later entry
/// shadows the earlier one. Ordered fixtures rely on this.
pub struct XRefMock {
    objects: HashMap<Ref, Arc<Value>>,
    stats: XRefStats,
    next_ref_num: Mutex<Option<u32>>,
}

impl XRefMock {
    /// Build the table from ordered entries. Last write wins.
    pub fn new(entries: impl IntoIterator<Item = XRefEntry>) -> Self {
        let mut objects = HashMap::new();
        for entry in entries {
            if objects
                .insert(entry.reference, Arc::new(entry.data))
                .is_some()
            {
                debug!(reference = %entry.reference, "xref entry shadows an earlier one");
            }
        }
        Self {
            objects,
            stats: XRefStats::new(),
            next_ref_num: Mutex::new(None),
        }
    }

    /// Build the table from a JSON array of `{"ref": "12R", "data": ...}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<XRefEntry> =
            serde_json::from_str(json).map_err(|e| XRefError::Fixture(e.to_string()))?;
        Ok(Self::new(entries))
    }

    /// Read a JSON fixture file and build the table from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| XRefError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let xref = Self::from_json(&json)?;
        debug!(path = %path.display(), objects = xref.len(), "loaded xref fixture");
        Ok(xref)
    }

    /// Number of distinct references in the table.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, reference: Ref) -> bool {
        self.objects.contains_key(&reference)
    }

    /// All registered references, sorted.
    pub fn references(&self) -> Vec<Ref> {
        let mut refs: Vec<Ref> = self.objects.keys().copied().collect();
        refs.sort();
        refs
    }

    /// Hand out a fresh generation-0 reference for an object the code under
    /// test is about to create.
    ///
    /// Numbering starts at the table size (or 1 for an empty table) and
    /// increases by one per call until [`XRefMock::reset_new_ref`].
    pub fn new_ref(&self) -> Ref {
        let mut next = self.next_ref_num.lock().expect("lock poisoned");
        let num = next.unwrap_or_else(|| (self.objects.len() as u32).max(1));
        *next = Some(num + 1);
        Ref::new(num, 0)
    }

    /// Restart [`XRefMock::new_ref`] numbering.
    pub fn reset_new_ref(&self) {
        *self.next_ref_num.lock().expect("lock poisoned") = None;
    }
}

impl XRef for XRefMock {
    fn fetch(&self, reference: Ref) -> Option<Arc<Value>> {
        self.objects.get(&reference).cloned()
    }

    fn stats(&self) -> &XRefStats {
        &self.stats
    }
}

impl fmt::Debug for XRefMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XRefMock")
            .field("object_count", &self.objects.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfmock_types::{Dict, Name};

    fn font_dict() -> Value {
        Dict::new()
            .with("Type", Name::new("Font"))
            .with("Subtype", Name::new("Type1"))
            .into()
    }

    fn sample() -> XRefMock {
        XRefMock::new(vec![
            XRefEntry::new(Ref::new(1, 0), font_dict()),
            XRefEntry::new(Ref::new(2, 0), Value::Int(42)),
            XRefEntry::new(Ref::new(3, 1), Value::Ref(Ref::new(2, 0))),
        ])
    }

    // -----------------------------------------------------------------------
    // Sync resolution
    // -----------------------------------------------------------------------

    #[test]
    fn fetch_returns_stored_value() {
        let xref = sample();
        assert_eq!(*xref.fetch(Ref::new(1, 0)).unwrap(), font_dict());
        assert_eq!(*xref.fetch(Ref::new(2, 0)).unwrap(), Value::Int(42));
    }

    #[test]
    fn fetch_is_same_instance_every_time() {
        let xref = sample();
        let first = xref.fetch(Ref::new(1, 0)).unwrap();
        let second = xref.fetch(Ref::new(1, 0)).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn fetch_unknown_is_none() {
        let xref = sample();
        assert!(xref.fetch(Ref::new(99, 0)).is_none());
        // Same number, different generation is a different reference.
        assert!(xref.fetch(Ref::new(1, 1)).is_none());
    }

    #[test]
    fn fetch_does_not_chase_reference_chains() {
        let xref = sample();
        let stored = xref.fetch(Ref::new(3, 1)).unwrap();
        assert_eq!(stored.as_reference(), Some(Ref::new(2, 0)));
    }

    #[test]
    fn fetch_if_ref_resolves_references() {
        let xref = sample();
        let field = Arc::new(Value::Ref(Ref::new(2, 0)));
        assert_eq!(*xref.fetch_if_ref(&field).unwrap(), Value::Int(42));
    }

    #[test]
    fn fetch_if_ref_passes_inline_values_through() {
        let xref = sample();
        let inline = Arc::new(Value::Name(Name::new("Catalog")));
        let out = xref.fetch_if_ref(&inline).unwrap();
        assert!(Arc::ptr_eq(&inline, &out));
    }

    #[test]
    fn fetch_if_ref_unknown_reference_is_none() {
        let xref = sample();
        let dangling = Arc::new(Value::Ref(Ref::new(50, 0)));
        assert!(xref.fetch_if_ref(&dangling).is_none());
    }

    #[test]
    fn resolves_dict_fields_through_trait_object() {
        let xref: Box<dyn XRef> = Box::new(XRefMock::new(vec![
            XRefEntry::new(Ref::new(7, 0), Value::Int(600)),
        ]));
        let page = Dict::new().with("Width", Ref::new(7, 0)).with("Height", 800i64);
        let width = xref.fetch_if_ref(page.get_raw("Width").unwrap()).unwrap();
        let height = xref.fetch_if_ref(page.get_raw("Height").unwrap()).unwrap();
        assert_eq!(width.as_int(), Some(600));
        assert_eq!(height.as_int(), Some(800));
    }

    // -----------------------------------------------------------------------
    // Async resolution
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn fetch_async_matches_fetch() {
        let xref = sample();
        let sync = xref.fetch(Ref::new(1, 0)).unwrap();
        let async_ = xref.fetch_async(Ref::new(1, 0)).await.unwrap();
        assert!(Arc::ptr_eq(&sync, &async_));
        assert!(xref.fetch_async(Ref::new(8, 0)).await.is_none());
    }

    #[tokio::test]
    async fn fetch_if_ref_async_pass_through() {
        let xref = sample();
        let inline = Arc::new(Value::Bool(true));
        let out = xref.fetch_if_ref_async(&inline).await.unwrap();
        assert!(Arc::ptr_eq(&inline, &out));

        let field = Arc::new(Value::Ref(Ref::new(2, 0)));
        assert_eq!(
            *xref.fetch_if_ref_async(&field).await.unwrap(),
            Value::Int(42)
        );
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_entry_last_write_wins() {
        let xref = XRefMock::new(vec![
            XRefEntry::new(Ref::new(4, 0), Value::Int(1)),
            XRefEntry::new(Ref::new(4, 0), Value::Int(2)),
        ]);
        assert_eq!(xref.len(), 1);
        assert_eq!(*xref.fetch(Ref::new(4, 0)).unwrap(), Value::Int(2));
    }

    #[test]
    fn empty_table() {
        let xref = XRefMock::new(Vec::new());
        assert!(xref.is_empty());
        assert!(xref.fetch(Ref::new(1, 0)).is_none());
    }

    #[test]
    fn references_are_sorted() {
        let xref = sample();
        assert_eq!(
            xref.references(),
            vec![Ref::new(1, 0), Ref::new(2, 0), Ref::new(3, 1)]
        );
        assert!(xref.contains(Ref::new(3, 1)));
        assert!(!xref.contains(Ref::new(3, 0)));
    }

    #[test]
    fn from_json_fixture() {
        let xref = XRefMock::from_json(
            r#"[
                {"ref": "1R", "data": {"dict": {"Type": {"name": "Catalog"}, "Pages": {"ref": "2R"}}}},
                {"ref": "2 0 R", "data": {"int": 3}}
            ]"#,
        )
        .unwrap();
        let catalog = xref.fetch(Ref::new(1, 0)).unwrap();
        let pages = xref
            .fetch_if_ref(catalog.as_dict().unwrap().get_raw("Pages").unwrap())
            .unwrap();
        assert_eq!(pages.as_int(), Some(3));
    }

    #[test]
    fn from_json_rejects_bad_fixture() {
        let err = XRefMock::from_json(r#"[{"ref": "nope", "data": "null"}]"#).unwrap_err();
        assert!(matches!(err, XRefError::Fixture(_)), "got: {err}");
    }

    #[test]
    fn load_fixture_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xref.json");
        std::fs::write(&path, r#"[{"ref": "5R", "data": {"bool": false}}]"#).unwrap();
        let xref = XRefMock::load(&path).unwrap();
        assert_eq!(*xref.fetch(Ref::new(5, 0)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = XRefMock::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, XRefError::Io { .. }));
    }

    // -----------------------------------------------------------------------
    // New reference allocation
    // -----------------------------------------------------------------------

    #[test]
    fn new_ref_counts_from_table_size() {
        let xref = sample();
        assert_eq!(xref.new_ref(), Ref::new(3, 0));
        assert_eq!(xref.new_ref(), Ref::new(4, 0));
        xref.reset_new_ref();
        assert_eq!(xref.new_ref(), Ref::new(3, 0));
    }

    #[test]
    fn new_ref_on_empty_table_starts_at_one() {
        let xref = XRefMock::new(Vec::new());
        assert_eq!(xref.new_ref(), Ref::new(1, 0));
        assert_eq!(xref.new_ref(), Ref::new(2, 0));
    }

    #[test]
    fn new_ref_does_not_touch_table() {
        let xref = sample();
        let fresh = xref.new_ref();
        assert_eq!(xref.len(), 3);
        // 3 0 R is free (only 3 1 R is registered).
        assert!(xref.fetch(fresh).is_none());
    }

    // -----------------------------------------------------------------------
    // Stats
    // -----------------------------------------------------------------------

    #[test]
    fn stats_are_per_table() {
        let a = sample();
        let b = sample();
        a.stats().add_stream_type("FlateDecode");
        assert_eq!(a.stats().stream_types().len(), 1);
        assert!(b.stats().stream_types().is_empty());
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::thread;

        let xref = Arc::new(sample());
        let expected = xref.fetch(Ref::new(1, 0)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let xref = Arc::clone(&xref);
                let expected = Arc::clone(&expected);
                thread::spawn(move || {
                    let got = xref.fetch(Ref::new(1, 0)).unwrap();
                    assert!(Arc::ptr_eq(&got, &expected));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("XRefMock"));
        assert!(debug.contains("object_count"));
    }
}
