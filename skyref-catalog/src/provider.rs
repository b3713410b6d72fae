//! The interface forced photometry uses to obtain reference positions.
//!
//! A measurement stage depends only on [`ReferenceProvider`]; where the
//! positions come from (a catalog database, an in-memory table) is the
//! implementor's business.

use std::any::Any;

use crate::data_ref::DataReference;
use crate::db::CatalogDatabase;
use crate::fetch::CoordinateFetcher;
use crate::references::{build_references, ReferenceCatalog};
use crate::{ExposureId, RefResult};
#[cfg(feature = "mysql")]
use crate::RefConfig;

pub trait ReferenceProvider {
    /// The in-memory exposure type the pipeline passes alongside the data reference.
    type Exposure: ?Sized;

    /// Reference sources on (or close to) the exposure named by `data_ref`.
    fn get_references(
        &mut self,
        data_ref: &dyn DataReference,
        exposure: &Self::Exposure,
    ) -> RefResult<ReferenceCatalog>;
}

/// Reference provider backed by a catalog database.
#[derive(Debug)]
pub struct DbReferenceProvider<D> {
    fetcher: CoordinateFetcher<D>,
}

impl<D: CatalogDatabase> DbReferenceProvider<D> {
    pub fn new(db: D) -> Self {
        Self {
            fetcher: CoordinateFetcher::new(db),
        }
    }

    /// One fetch, one freshly allocated catalog.
    pub fn build_references(&mut self, exposure_id: ExposureId) -> RefResult<ReferenceCatalog> {
        build_references(&mut self.fetcher, exposure_id)
    }

    pub fn fetcher(&self) -> &CoordinateFetcher<D> {
        &self.fetcher
    }
}

#[cfg(feature = "mysql")]
impl DbReferenceProvider<crate::db::MySqlCatalog> {
    /// Provider for the MySQL catalog at `config.full_url()`. Does not dial
    /// until the first call.
    pub fn mysql(config: &RefConfig) -> Self {
        Self::new(crate::db::MySqlCatalog::from_config(config))
    }
}

impl<D: CatalogDatabase> ReferenceProvider for DbReferenceProvider<D> {
    /// Accepted for interface compatibility; the footprint comes from the
    /// database, so the exposure's pixels and WCS are not consulted.
    type Exposure = dyn Any;

    fn get_references(
        &mut self,
        data_ref: &dyn DataReference,
        _exposure: &Self::Exposure,
    ) -> RefResult<ReferenceCatalog> {
        let exposure_id = data_ref.ccd_exposure_id()?;
        self.build_references(exposure_id)
    }
}
