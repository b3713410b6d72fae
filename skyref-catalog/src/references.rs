//! Minimal reference catalog for forced photometry.
//!
//! Records carry identity and position only: an object id and an ICRS
//! coordinate. The catalog keeps records in the order they were appended.

use log::info;
use serde::Serialize;
use skyref_core::IcrsCoord;

use crate::db::CatalogDatabase;
use crate::fetch::CoordinateFetcher;
use crate::{ExposureId, RefResult};

/// Field types a minimal schema can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 64-bit signed integer.
    I64,
    /// Angle, stored in radians.
    Angle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub field_type: FieldType,
    pub doc: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    /// `id`, `coord_ra`, `coord_dec`.
    pub fn minimal() -> Self {
        Self {
            fields: vec![
                SchemaField {
                    name: "id",
                    field_type: FieldType::I64,
                    doc: "unique ID",
                },
                SchemaField {
                    name: "coord_ra",
                    field_type: FieldType::Angle,
                    doc: "position in ra/dec",
                },
                SchemaField {
                    name: "coord_dec",
                    field_type: FieldType::Angle,
                    doc: "position in ra/dec",
                },
            ],
        }
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

/// Serializes as `{"id": .., "coord": {"ra": .., "dec": ..}}` with angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRecord {
    id: i64,
    coord: IcrsCoord,
}

impl ReferenceRecord {
    pub fn new(id: i64, coord: IcrsCoord) -> Self {
        Self { id, coord }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn coord(&self) -> IcrsCoord {
        self.coord
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn set_coord(&mut self, coord: IcrsCoord) {
        self.coord = coord;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCatalog {
    schema: Schema,
    records: Vec<ReferenceRecord>,
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceCatalog {
    /// Empty catalog with the minimal schema.
    pub fn new() -> Self {
        Self {
            schema: Schema::minimal(),
            records: Vec::new(),
        }
    }

    /// Reserves room for exactly `additional` more records.
    pub fn preallocate(&mut self, additional: usize) {
        self.records.reserve_exact(additional);
    }

    pub fn append(&mut self, record: ReferenceRecord) {
        self.records.push(record);
    }

    /// One record per pair, in the given order.
    pub fn from_coordinates(coords: &[(i64, IcrsCoord)]) -> Self {
        let mut catalog = Self::new();
        catalog.preallocate(coords.len());
        for &(id, coord) in coords {
            catalog.append(ReferenceRecord::new(id, coord));
        }
        catalog
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&ReferenceRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// Sorts by object id; database order is not stable across runs.
    pub fn sort_by_id(&mut self) {
        self.records.sort_by_key(|r| r.id);
    }
}

impl<'a> IntoIterator for &'a ReferenceCatalog {
    type Item = &'a ReferenceRecord;
    type IntoIter = std::slice::Iter<'a, ReferenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for ReferenceCatalog {
    type Item = ReferenceRecord;
    type IntoIter = std::vec::IntoIter<ReferenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Fetches the exposure's catalog sources and packs them into a fresh catalog.
///
/// The catalog is preallocated to the number of fetched sources and holds
/// exactly one record per source, in fetch order.
pub fn build_references<D: CatalogDatabase>(
    fetcher: &mut CoordinateFetcher<D>,
    exposure_id: ExposureId,
) -> RefResult<ReferenceCatalog> {
    let coords = fetcher.fetch_coordinates(exposure_id)?;
    let catalog = ReferenceCatalog::from_coordinates(&coords);
    info!(
        "built {} reference sources for exposure {}",
        catalog.len(),
        exposure_id
    );
    Ok(catalog)
}
