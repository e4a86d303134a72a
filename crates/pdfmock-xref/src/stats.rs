use std::collections::BTreeMap;
use std::sync::RwLock;

/// Stream and font type counters.
///
/// The engine tallies the filters and font formats it meets while walking a
/// document; tests assert on the tallies. This is the only mutable part of a
/// resolver and is kept apart from the object table.
#[derive(Debug, Default)]
pub struct XRefStats {
    stream_types: RwLock<BTreeMap<String, usize>>,
    font_types: RwLock<BTreeMap<String, usize>>,
}

impl XRefStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a stream filter (e.g. `FlateDecode`).
    pub fn add_stream_type(&self, kind: impl Into<String>) {
        bump(&self.stream_types, kind.into());
    }

    /// Record one occurrence of a font format (e.g. `TrueType`).
    pub fn add_font_type(&self, kind: impl Into<String>) {
        bump(&self.font_types, kind.into());
    }

    /// Snapshot of stream type counts, sorted by type name.
    pub fn stream_types(&self) -> BTreeMap<String, usize> {
        self.stream_types.read().expect("lock poisoned").clone()
    }

    /// Snapshot of font type counts, sorted by type name.
    pub fn font_types(&self) -> BTreeMap<String, usize> {
        self.font_types.read().expect("lock poisoned").clone()
    }

    pub fn clear(&self) {
        self.stream_types.write().expect("lock poisoned").clear();
        self.font_types.write().expect("lock poisoned").clear();
    }
}

fn bump(counts: &RwLock<BTreeMap<String, usize>>, kind: String) {
    *counts.write().expect("lock poisoned").entry(kind).or_insert(0) += 1;
}
