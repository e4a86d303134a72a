//! Harness helpers for driving engine code without a full viewer.
//!
//! - [`ids`] — [`create_id_factory`]: a page's id allocator, without the page
//! - [`link`] — [`MockLinkService`]: records the last navigation request
//! - [`params`] — [`build_document_params`]: locate a test PDF
//! - [`config`] — [`HarnessConfig`]: fixture paths and CMap settings (TOML)

pub mod config;
pub mod error;
pub mod ids;
pub mod link;
pub mod params;

pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use ids::{
    create_id_factory, create_id_factory_for_ref, GlobalIdFactory, IdFactory, LocalIdFactory,
    TEST_DOC_ID,
};
pub use link::{Destination, DestinationTarget, MockLinkService};
pub use params::{build_document_params, DocumentOptions, DocumentParams};
