//! Object model for the pdfmock test-support layer.
//!
//! A PDF document is a graph of objects. Some objects are written inline,
//! others are replaced by an indirect reference (`12 0 R`) that has to be
//! resolved through the cross-reference table before use. This crate
//! provides the value types that graph is built from; resolution itself
//! lives in `pdfmock-xref`.
//!
//! # Key Types
//!
//! - [`Ref`] — Indirect reference `(num, generation)`, compared by value
//! - [`Name`] — PDF name object (`/Type`)
//! - [`Dict`] — Name-keyed dictionary of shared values
//! - [`Value`] — Any PDF object, inline or a reference

pub mod error;
pub mod reference;
pub mod value;

pub use error::TypeError;
pub use reference::Ref;
pub use value::{Dict, Name, Value};
