//! Pluggable resource acquisition for pdfmock.
//!
//! Engine code under test never opens files or sockets itself: it asks a
//! [`ResourceProvider`] for bytes. Tests pick the backend up front.
//!
//! # Backends
//!
//! - [`FileProvider`] — local filesystem; empty files are failures
//! - [`NetworkProvider`] — HTTP GET via `reqwest`
//! - [`CMapProvider`] — named CMap files, optionally packed (`.bcmap`)
//! - [`Provider`] — one of the above, built from a [`ProviderConfig`]
//!
//! Drawing surfaces come from a [`SurfaceFactory`]; [`CanvasFactory`] is the
//! in-process implementation.
//!
//! # Error kinds
//!
//! 1. Configuration errors are reported before any I/O.
//! 2. Acquisition errors are one failure per call, never retried.
//! 3. Surface precondition violations panic.

pub mod cmap;
pub mod error;
pub mod file;
pub mod network;
pub mod provider;
pub mod resource;
pub mod surface;
pub mod traits;

pub use cmap::{CMapProvider, BCMAP_SUFFIX};
pub use error::{FetchError, FetchResult};
pub use file::FileProvider;
pub use network::NetworkProvider;
pub use provider::{Provider, ProviderConfig};
pub use resource::{CMapCompression, CMapData, Resource, ResourceDescriptor};
pub use surface::{Canvas, CanvasAndContext, CanvasFactory, DrawingContext, SurfaceFactory};
pub use traits::ResourceProvider;
