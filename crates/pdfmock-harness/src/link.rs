//! Stand-in for the viewer's link service.
//!
//! The engine hands explicit destinations to a link service when a link is
//! followed. [`MockLinkService`] only records the last destination so tests
//! can assert on it.

use std::sync::Arc;

use pdfmock_types::{Name, Ref, Value};
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};

/// Page a destination points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestinationTarget {
    /// Page object reference, as written in the document.
    Ref(Ref),
    /// Zero-based page index.
    Index(u32),
}

/// Explicit destination `[page, /Kind, x, y, ...]`.
///
/// Coordinates the document leaves as `null` are `None` here.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub target: DestinationTarget,
    pub kind: Name,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Arguments after `y` (zoom for `/XYZ`, corners for `/FitR`).
    pub rest: Vec<Option<f64>>,
}

impl Destination {
    pub fn new(
        target: DestinationTarget,
        kind: impl Into<Name>,
        x: Option<f64>,
        y: Option<f64>,
    ) -> Self {
        Self {
            target,
            kind: kind.into(),
            x,
            y,
            rest: Vec::new(),
        }
    }

    /// Parse a destination array from the object model.
    ///
    /// Page indices must leave room for a one-based page number in `u32`.
    pub fn from_array(items: &[Arc<Value>]) -> HarnessResult<Self> {
        let (page, tail) = items
            .split_first()
            .ok_or_else(|| HarnessError::Destination("empty array".into()))?;
        let target = match page.as_ref() {
            Value::Ref(r) => DestinationTarget::Ref(*r),
            Value::Int(i) => u32::try_from(*i)
                .ok()
                .filter(|index| *index < u32::MAX)
                .map(DestinationTarget::Index)
                .ok_or_else(|| HarnessError::Destination(format!("page index {i} out of range")))?,
            other => {
                return Err(HarnessError::Destination(format!(
                    "page must be a ref or index, found {}",
                    other.kind_name()
                )))
            }
        };
        let (kind, args) = tail
            .split_first()
            .ok_or_else(|| HarnessError::Destination("missing destination kind".into()))?;
        let kind = kind
            .as_name()
            .cloned()
            .ok_or_else(|| HarnessError::Destination("kind must be a name".into()))?;

        let coords = args
            .iter()
            .map(|v| coordinate(v))
            .collect::<HarnessResult<Vec<_>>>()?;
        let mut coords = coords.into_iter();
        let x = coords.next().flatten();
        let y = coords.next().flatten();

        Ok(Self {
            target,
            kind,
            x,
            y,
            rest: coords.collect(),
        })
    }
}

fn coordinate(value: &Value) -> HarnessResult<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        other => other.as_number().map(Some).ok_or_else(|| {
            HarnessError::Destination(format!(
                "coordinate must be a number, found {}",
                other.kind_name()
            ))
        }),
    }
}

/// Records the most recent navigation request.
#[derive(Debug)]
pub struct MockLinkService {
    used: bool,
    page: Option<DestinationTarget>,
    x: f64,
    y: f64,
    name: String,
    page_number: u32,
    pages_count: u32,
}

impl Default for MockLinkService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLinkService {
    pub fn new() -> Self {
        Self {
            used: false,
            page: None,
            x: 0.0,
            y: 0.0,
            name: String::new(),
            page_number: 1,
            pages_count: 0,
        }
    }

    /// Scroll to `dest`. Absent coordinates are recorded as zero.
    pub fn go_to_destination(&mut self, dest: &Destination) {
        self.used = true;
        self.page = Some(dest.target.clone());
        self.x = dest.x.unwrap_or(0.0);
        self.y = dest.y.unwrap_or(0.0);
        self.name = dest.kind.as_str().to_string();
        if let DestinationTarget::Index(index) = dest.target {
            self.page_number = index.saturating_add(1);
        }
        debug!(page = ?dest.target, x = self.x, y = self.y, kind = %self.name, "go to destination");
    }

    /// Parse and follow a raw destination array.
    pub fn go_to_array(&mut self, items: &[Arc<Value>]) -> HarnessResult<()> {
        let dest = Destination::from_array(items)?;
        self.go_to_destination(&dest);
        Ok(())
    }

    /// Back to the freshly constructed state.
    pub fn reset(&mut self) {
        self.used = false;
        self.page = None;
        self.x = 0.0;
        self.y = 0.0;
        self.name.clear();
    }

    pub fn used(&self) -> bool {
        self.used
    }

    pub fn page(&self) -> Option<&DestinationTarget> {
        self.page.as_ref()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-based current page.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn set_page_number(&mut self, page_number: u32) {
        self.page_number = page_number;
    }

    pub fn pages_count(&self) -> u32 {
        self.pages_count
    }

    pub fn set_pages_count(&mut self, pages_count: u32) {
        self.pages_count = pages_count;
    }
}
