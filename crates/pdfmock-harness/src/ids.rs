use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use pdfmock_types::Ref;

/// Document id every factory built by [`create_id_factory`] reports.
pub const TEST_DOC_ID: &str = "d0";

/// Allocates the ids the engine stamps on fonts and page objects.
pub trait IdFactory: Send + Sync {
    /// Document-scoped id (`g_d0`).
    fn doc_id(&self) -> String;

    /// Next font id in the document (`f1`, `f2`, ...).
    fn create_font_id(&self) -> String;

    /// Next object id on this page (`p0_1`, `p0_2`, ...).
    fn create_obj_id(&self) -> String;

    /// Id derived from the page's own reference, if it has one.
    fn page_obj_id(&self) -> Option<String>;
}

/// Per-document id state. Font ids are unique across all pages.
#[derive(Debug)]
pub struct GlobalIdFactory {
    doc_id: String,
    font_count: AtomicU32,
}

impl GlobalIdFactory {
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            font_count: AtomicU32::new(0),
        }
    }

    pub fn doc_id(&self) -> String {
        format!("g_{}", self.doc_id)
    }

    pub fn create_font_id(&self) -> String {
        let n = self.font_count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("f{n}")
    }
}

/// Per-page id factory layered over the document's [`GlobalIdFactory`].
#[derive(Debug)]
pub struct LocalIdFactory {
    global: Arc<GlobalIdFactory>,
    page_index: usize,
    page_ref: Option<Ref>,
    obj_count: AtomicU32,
}

impl LocalIdFactory {
    pub fn new(global: Arc<GlobalIdFactory>, page_index: usize, page_ref: Option<Ref>) -> Self {
        Self {
            global,
            page_index,
            page_ref,
            obj_count: AtomicU32::new(0),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }
}

impl IdFactory for LocalIdFactory {
    fn doc_id(&self) -> String {
        self.global.doc_id()
    }

    fn create_font_id(&self) -> String {
        self.global.create_font_id()
    }

    fn create_obj_id(&self) -> String {
        let n = self.obj_count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("p{}_{n}", self.page_index)
    }

    fn page_obj_id(&self) -> Option<String> {
        self.page_ref.map(|r| format!("p{r}"))
    }
}

/// Minimal page: just enough context for the engine's id allocation.
struct PageContext {
    id_factory: LocalIdFactory,
}

impl PageContext {
    fn new(doc: &Arc<GlobalIdFactory>, page_index: usize, page_ref: Option<Ref>) -> Self {
        Self {
            id_factory: LocalIdFactory::new(Arc::clone(doc), page_index, page_ref),
        }
    }
}

/// Id factory for page `page_index` of a throwaway document `d0`.
pub fn create_id_factory(page_index: usize) -> LocalIdFactory {
    let doc = Arc::new(GlobalIdFactory::new(TEST_DOC_ID));
    PageContext::new(&doc, page_index, None).id_factory
}

/// Like [`create_id_factory`], for a page that has its own reference.
pub fn create_id_factory_for_ref(page_index: usize, page_ref: Ref) -> LocalIdFactory {
    let doc = Arc::new(GlobalIdFactory::new(TEST_DOC_ID));
    PageContext::new(&doc, page_index, Some(page_ref)).id_factory
}
