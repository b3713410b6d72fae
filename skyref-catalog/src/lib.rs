//! Reference positions for forced photometry, pulled from a catalog database.
//!
//! Given a data reference naming one CCD exposure, the exposure's sky
//! footprint polygon is looked up in `Science_Ccd_Exposure`, expanded into
//! HTM index ranges by the `scisql` region procedure, and joined against the
//! `Object` table. Every source inside the footprint comes back as a minimal
//! reference record: object id plus ICRS position.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`RefConfig`]: database name and URL |
//! | [`data_ref`] | [`DataReference`], [`DataId`], [`ExposureId`] |
//! | [`db`] | [`CatalogDatabase`](db::CatalogDatabase) seam, SQL, MySQL and in-memory backends |
//! | [`fetch`] | [`CoordinateFetcher`]: exposure id → `(id, coord)` pairs |
//! | [`references`] | [`ReferenceCatalog`] and [`build_references`] |
//! | [`provider`] | [`ReferenceProvider`] interface and its database implementation |
//!
//! # Quick Start
//!
//! ```ignore
//! use skyref_catalog::{DataId, DbReferenceProvider, ExposureId, RefConfig, ReferenceProvider};
//!
//! let config = RefConfig::new("rplante_DC3b_u_pt11final")?;
//! let mut provider = DbReferenceProvider::mysql(&config);
//!
//! let data_ref = DataId::for_exposure(ExposureId(1_234_567));
//! let references = provider.get_references(&data_ref, &())?;
//! println!("{} reference sources", references.len());
//! ```
//!
//! # Features
//!
//! - **`mysql`** (default) — [`MySqlCatalog`](db::MySqlCatalog) backend.
//! - **`cli`** — the `fetch-references` binary.
//! - **`integration-tests`** — tests that need a live catalog database.

pub mod config;
pub mod data_ref;
pub mod db;
pub mod errors;
pub mod fetch;
pub mod provider;
pub mod references;

pub use config::RefConfig;
pub use data_ref::{DataId, DataReference, ExposureId};
pub use errors::{RefError, RefResult};
pub use fetch::CoordinateFetcher;
pub use provider::{DbReferenceProvider, ReferenceProvider};
pub use references::{build_references, ReferenceCatalog, ReferenceRecord, Schema};
