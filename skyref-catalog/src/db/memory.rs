//! In-memory catalog: rows pre-matched per exposure.
//!
//! Stands in for the database in tests and offline runs. Footprint matching
//! is not recomputed; whatever rows were inserted for an exposure are what
//! the query returns, in insertion order.

use std::collections::HashMap;

use log::debug;

use super::{CatalogDatabase, CatalogSourceRow};
use crate::{ExposureId, RefError, RefResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    exposures: HashMap<ExposureId, Vec<CatalogSourceRow>>,
    queries: Vec<ExposureId>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an exposure and the rows its footprint query returns.
    /// An empty `rows` means the exposure exists but covers no sources.
    pub fn insert_exposure(&mut self, exposure_id: ExposureId, rows: Vec<CatalogSourceRow>) {
        self.exposures.insert(exposure_id, rows);
    }

    /// Builder-style [`insert_exposure`](Self::insert_exposure).
    pub fn with_exposure(
        mut self,
        exposure_id: ExposureId,
        rows: impl IntoIterator<Item = (i64, f64, f64)>,
    ) -> Self {
        let rows = rows
            .into_iter()
            .map(|(id, ra, dec)| CatalogSourceRow::new(id, ra, dec))
            .collect();
        self.insert_exposure(exposure_id, rows);
        self
    }

    /// Exposure ids queried so far, oldest first.
    pub fn queries(&self) -> &[ExposureId] {
        &self.queries
    }
}

impl CatalogDatabase for MemoryCatalog {
    fn sources_in_footprint(&mut self, exposure_id: ExposureId) -> RefResult<Vec<CatalogSourceRow>> {
        self.queries.push(exposure_id);

        let rows = self
            .exposures
            .get(&exposure_id)
            .ok_or(RefError::ExposureNotFound(exposure_id))?;
        debug!("memory catalog: {} rows for exposure {}", rows.len(), exposure_id);
        Ok(rows.clone())
    }
}
