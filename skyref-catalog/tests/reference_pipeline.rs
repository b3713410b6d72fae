use std::collections::HashSet;

use skyref_catalog::db::{CatalogDatabase, CatalogSourceRow, MemoryCatalog};
use skyref_catalog::{
    build_references, CoordinateFetcher, DataId, DbReferenceProvider, ExposureId, RefError,
    RefResult, ReferenceProvider,
};

const EXPOSURE: ExposureId = ExposureId(12345);

fn sample_catalog() -> MemoryCatalog {
    MemoryCatalog::new().with_exposure(EXPOSURE, [(1001, 10.5, -5.2), (1002, 10.6, -5.1)])
}

/// Returns its rows in a different order on every call.
struct ShufflingCatalog {
    rows: Vec<CatalogSourceRow>,
}

impl CatalogDatabase for ShufflingCatalog {
    fn sources_in_footprint(&mut self, _exposure_id: ExposureId) -> RefResult<Vec<CatalogSourceRow>> {
        self.rows.rotate_left(1);
        Ok(self.rows.clone())
    }
}

struct FailingCatalog;

impl CatalogDatabase for FailingCatalog {
    fn sources_in_footprint(&mut self, _exposure_id: ExposureId) -> RefResult<Vec<CatalogSourceRow>> {
        Err(RefError::query(
            "region join",
            "FUNCTION scisql_s2PtInCPoly does not exist",
        ))
    }
}

#[test]
fn test_two_matches_for_exposure_12345() {
    let mut provider = DbReferenceProvider::new(sample_catalog());
    let data_ref = DataId::for_exposure(EXPOSURE);

    let catalog = provider.get_references(&data_ref, &()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.ids(), vec![1001, 1002]);

    let expected = [(10.5, -5.2), (10.6, -5.1)];
    for (record, (ra, dec)) in catalog.iter().zip(expected) {
        let (got_ra, got_dec) = record.coord().to_degrees();
        assert!((got_ra - ra).abs() < 1e-12, "ra {} != {}", got_ra, ra);
        assert!((got_dec - dec).abs() < 1e-12, "dec {} != {}", got_dec, dec);
    }
}

#[test]
fn test_catalog_size_equals_row_count() {
    let rows: Vec<(i64, f64, f64)> = (0..250)
        .map(|i| (i, (i as f64) * 0.001 + 30.0, -10.0 + (i as f64) * 0.0005))
        .collect();
    let db = MemoryCatalog::new().with_exposure(EXPOSURE, rows.clone());
    let mut fetcher = CoordinateFetcher::new(db);

    let catalog = build_references(&mut fetcher, EXPOSURE).unwrap();

    assert_eq!(catalog.len(), rows.len());
    let returned: HashSet<i64> = rows.iter().map(|r| r.0).collect();
    assert!(catalog.ids().iter().all(|id| returned.contains(id)));
}

#[test]
fn test_no_matches_gives_empty_catalog() {
    let mut db = MemoryCatalog::new();
    db.insert_exposure(EXPOSURE, Vec::new());
    let mut provider = DbReferenceProvider::new(db);

    let catalog = provider.build_references(EXPOSURE).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.schema().field_names(), vec!["id", "coord_ra", "coord_dec"]);
}

#[test]
fn test_repeated_calls_same_content() {
    let db = ShufflingCatalog {
        rows: vec![
            CatalogSourceRow::new(1, 10.0, 1.0),
            CatalogSourceRow::new(2, 10.1, 1.1),
            CatalogSourceRow::new(3, 10.2, 1.2),
        ],
    };
    let mut provider = DbReferenceProvider::new(db);

    let first = provider.build_references(EXPOSURE).unwrap();
    let second = provider.build_references(EXPOSURE).unwrap();
    assert_ne!(first.ids(), second.ids());

    let as_set = |ids: Vec<i64>| ids.into_iter().collect::<HashSet<_>>();
    assert_eq!(as_set(first.ids()), as_set(second.ids()));

    let mut first = first;
    let mut second = second;
    first.sort_by_id();
    second.sort_by_id();
    assert_eq!(first, second);
}

#[test]
fn test_database_error_propagates() {
    let mut provider = DbReferenceProvider::new(FailingCatalog);
    let err = provider
        .get_references(&DataId::for_exposure(EXPOSURE), &())
        .unwrap_err();

    match err {
        RefError::Query { operation, message } => {
            assert_eq!(operation, "region join");
            assert!(message.contains("scisql_s2PtInCPoly"));
        }
        other => panic!("expected Query error, got {:?}", other),
    }
}

#[test]
fn test_unknown_exposure_reported() {
    let mut provider = DbReferenceProvider::new(sample_catalog());
    let err = provider.build_references(ExposureId(99)).unwrap_err();
    assert!(matches!(err, RefError::ExposureNotFound(ExposureId(99))));
}

#[test]
fn test_exposure_id_taken_from_data_ref() {
    let mut provider = DbReferenceProvider::new(sample_catalog());
    let data_ref: DataId = "ccdExposureId=12345 run=4192".parse().unwrap();

    provider.get_references(&data_ref, &()).unwrap();

    assert_eq!(provider.fetcher().database().queries(), &[EXPOSURE]);
}

#[test]
fn test_provider_behind_trait_object() {
    let mut provider: Box<dyn ReferenceProvider<Exposure = dyn std::any::Any>> =
        Box::new(DbReferenceProvider::new(sample_catalog()));

    let catalog = provider
        .get_references(&DataId::for_exposure(EXPOSURE), &())
        .unwrap();
    assert_eq!(catalog.len(), 2);
}
