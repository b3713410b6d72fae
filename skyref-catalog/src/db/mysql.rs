//! MySQL backend with the `scisql` spherical-geometry UDFs installed.
//!
//! Each [`sources_in_footprint`](CatalogDatabase::sources_in_footprint)
//! call opens its own connection and transaction, runs the statements in
//! [`super::sql`], streams the result rows, and commits. Nothing is retried;
//! the first driver error aborts the call and the transaction is rolled
//! back when it is dropped.

use ::mysql::prelude::Queryable;
use ::mysql::{from_row_opt, Conn, Opts, Params, Transaction, TxOpts};
use log::debug;

use super::{sql, CatalogDatabase, CatalogSourceRow};
use crate::{ExposureId, RefConfig, RefError, RefResult};

#[derive(Debug, Clone)]
pub struct MySqlCatalog {
    location: String,
}

impl MySqlCatalog {
    /// Stores the location only; it is parsed and dialled on first query.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn from_config(config: &RefConfig) -> Self {
        Self::new(config.full_url())
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    fn connect(&self) -> RefResult<Conn> {
        let opts =
            Opts::from_url(&self.location).map_err(|e| RefError::connection(&self.location, e))?;
        Conn::new(opts).map_err(|e| RefError::connection(&self.location, e))
    }
}

impl CatalogDatabase for MySqlCatalog {
    fn sources_in_footprint(&mut self, exposure_id: ExposureId) -> RefResult<Vec<CatalogSourceRow>> {
        let mut conn = self.connect()?;
        let mut tx = conn
            .start_transaction(TxOpts::default())
            .map_err(|e| RefError::query("start transaction", e))?;

        let rows = run_footprint_query(&mut tx, exposure_id)?;

        tx.commit().map_err(|e| RefError::query("commit", e))?;
        Ok(rows)
    }
}

/// Statement runner the footprint sequence is issued through. Each call
/// names the step it belongs to so driver errors carry it.
trait FootprintSession {
    fn execute(&mut self, operation: &'static str, stmt: &'static str, params: Params) -> RefResult<()>;

    fn query_flag(&mut self, operation: &'static str, stmt: &'static str) -> RefResult<Option<i64>>;

    fn query_sources(
        &mut self,
        operation: &'static str,
        stmt: &'static str,
    ) -> RefResult<Vec<CatalogSourceRow>>;
}

impl FootprintSession for Transaction<'_> {
    fn execute(&mut self, operation: &'static str, stmt: &'static str, params: Params) -> RefResult<()> {
        let result = match params {
            Params::Empty => self.query_drop(stmt),
            params => self.exec_drop(stmt, params),
        };
        result.map_err(|e| RefError::query(operation, e))
    }

    fn query_flag(&mut self, operation: &'static str, stmt: &'static str) -> RefResult<Option<i64>> {
        self.query_first(stmt)
            .map_err(|e| RefError::query(operation, e))
    }

    fn query_sources(
        &mut self,
        operation: &'static str,
        stmt: &'static str,
    ) -> RefResult<Vec<CatalogSourceRow>> {
        let result = self
            .query_iter(stmt)
            .map_err(|e| RefError::query(operation, e))?;

        let mut rows = Vec::new();
        for row in result {
            let row = row.map_err(|e| RefError::query("row fetch", e))?;
            let (object_id, ra_deg, dec_deg) =
                from_row_opt::<(i64, f64, f64)>(row).map_err(RefError::row_decode)?;
            rows.push(CatalogSourceRow::new(object_id, ra_deg, dec_deg));
        }
        Ok(rows)
    }
}

/// Reset, lookup, check, region build, join. Stops at the first failure.
fn run_footprint_query<S: FootprintSession>(
    session: &mut S,
    exposure_id: ExposureId,
) -> RefResult<Vec<CatalogSourceRow>> {
    session.execute("footprint reset", sql::RESET_FOOTPRINT, Params::Empty)?;
    session.execute("footprint lookup", sql::SELECT_FOOTPRINT, (exposure_id.0,).into())?;
    debug!("footprint lookup issued for exposure {}", exposure_id);

    if session.query_flag("footprint check", sql::FOOTPRINT_LOADED)? != Some(1) {
        return Err(RefError::ExposureNotFound(exposure_id));
    }

    session.execute("region construction", sql::BUILD_REGION, (sql::REGION_PADDING,).into())?;

    let rows = session.query_sources("region join", sql::SELECT_SOURCES_IN_REGION)?;
    debug!(
        "region join returned {} rows for exposure {}",
        rows.len(),
        exposure_id
    );
    Ok(rows)
}
