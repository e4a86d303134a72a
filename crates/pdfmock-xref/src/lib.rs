//! Indirect-object resolution for pdfmock.
//!
//! A document is a graph of objects where some nodes are inline and others
//! are indirect references that must be looked up in the cross-reference
//! table before use. Engine code does not care which: it calls
//! [`XRef::fetch_if_ref`] on every field and gets a concrete value back.
//!
//! # Modules
//!
//! - [`error`] — Fixture loading errors
//! - [`traits`] — The [`XRef`] trait, sync and async resolution
//! - [`memory`] — [`XRefMock`], a fixed in-memory table for tests
//! - [`stats`] — [`XRefStats`], stream/font type counters
//!
//! # Rules
//!
//! 1. Resolving a registered reference always yields the same instance.
//! 2. Resolving a non-reference returns it unchanged.
//! 3. An unknown reference resolves to `None`, never to an error.
//! 4. The mock table is never written after construction.

pub mod error;
pub mod memory;
pub mod stats;
pub mod traits;

pub use error::{Result, XRefError};
pub use memory::{XRefEntry, XRefMock};
pub use stats::XRefStats;
pub use traits::XRef;
