//! Coordinate fetcher: exposure id → `(objectId, ICRS position)` pairs.

use log::debug;
use skyref_core::IcrsCoord;

use crate::db::CatalogDatabase;
use crate::{ExposureId, RefResult};

/// Runs the footprint query for one exposure at a time.
///
/// Holds no state between calls beyond the database handle; each call is
/// one transaction on the database side.
#[derive(Debug)]
pub struct CoordinateFetcher<D> {
    db: D,
}

impl<D: CatalogDatabase> CoordinateFetcher<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// All catalog sources inside the exposure's padded footprint.
    ///
    /// Order is whatever the database returns; nothing is filtered,
    /// deduplicated, or sorted here.
    ///
    /// # Errors
    /// Any database failure, unchanged, or [`crate::RefError::Coordinate`]
    /// if a row carries an invalid RA/Dec.
    pub fn fetch_coordinates(&mut self, exposure_id: ExposureId) -> RefResult<Vec<(i64, IcrsCoord)>> {
        let rows = self.db.sources_in_footprint(exposure_id)?;
        debug!("fetched {} catalog sources for exposure {}", rows.len(), exposure_id);

        rows.iter()
            .map(|row| row.coord().map(|coord| (row.object_id, coord)))
            .collect()
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    pub fn into_database(self) -> D {
        self.db
    }
}
