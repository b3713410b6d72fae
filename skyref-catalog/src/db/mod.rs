//! Catalog database seam.
//!
//! The footprint query runs entirely inside the database: the exposure's
//! polygon is looked up, turned into HTM index ranges by the `scisql`
//! region procedure, and joined against `Object` with an exact
//! point-in-polygon check. [`CatalogDatabase`] hides where that happens so
//! the fetcher can run against MySQL or an in-memory table.
//!
//! - [`sql`] — statements issued by the MySQL backend
//! - [`memory`] — [`MemoryCatalog`], rows keyed by exposure id
//! - `mysql` — [`MySqlCatalog`] (feature `mysql`)

pub mod memory;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod sql;

pub use memory::MemoryCatalog;
#[cfg(feature = "mysql")]
pub use self::mysql::MySqlCatalog;

use skyref_core::IcrsCoord;

use crate::{ExposureId, RefError, RefResult};

/// One row of the spatial join, exactly as the database returned it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogSourceRow {
    pub object_id: i64,
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl CatalogSourceRow {
    pub fn new(object_id: i64, ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            object_id,
            ra_deg,
            dec_deg,
        }
    }

    /// Degrees → ICRS position.
    ///
    /// # Errors
    /// [`RefError::Coordinate`] for a non-finite RA/Dec or a Dec beyond the poles.
    pub fn coord(&self) -> RefResult<IcrsCoord> {
        IcrsCoord::from_degrees(self.ra_deg, self.dec_deg).map_err(|source| {
            RefError::Coordinate {
                object_id: self.object_id,
                source,
            }
        })
    }
}

pub trait CatalogDatabase {
    /// All catalog sources inside the exposure's (padded) footprint, in
    /// database order. Runs as one read-only transaction.
    fn sources_in_footprint(&mut self, exposure_id: ExposureId) -> RefResult<Vec<CatalogSourceRow>>;
}

impl<D: CatalogDatabase + ?Sized> CatalogDatabase for &mut D {
    fn sources_in_footprint(&mut self, exposure_id: ExposureId) -> RefResult<Vec<CatalogSourceRow>> {
        (**self).sources_in_footprint(exposure_id)
    }
}

impl<D: CatalogDatabase + ?Sized> CatalogDatabase for Box<D> {
    fn sources_in_footprint(&mut self, exposure_id: ExposureId) -> RefResult<Vec<CatalogSourceRow>> {
        (**self).sources_in_footprint(exposure_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_coord() {
        let row = CatalogSourceRow::new(1001, 10.5, -5.2);
        let coord = row.coord().unwrap();
        assert!((coord.ra().degrees() - 10.5).abs() < 1e-12);
        assert!((coord.dec().degrees() + 5.2).abs() < 1e-12);
    }

    #[test]
    fn test_row_coord_invalid_dec() {
        let row = CatalogSourceRow::new(77, 10.0, -95.0);
        match row.coord() {
            Err(RefError::Coordinate { object_id, .. }) => assert_eq!(object_id, 77),
            other => panic!("expected Coordinate error, got {:?}", other),
        }
    }

    #[test]
    fn test_boxed_database() {
        let mut inner = MemoryCatalog::new();
        inner.insert_exposure(ExposureId(1), vec![CatalogSourceRow::new(5, 1.0, 2.0)]);
        let mut db: Box<dyn CatalogDatabase> = Box::new(inner);

        assert_eq!(db.sources_in_footprint(ExposureId(1)).unwrap().len(), 1);
    }
}
