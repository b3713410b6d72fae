//! SQL issued against the catalog database.
//!
//! Values are always bound as statement parameters (`?`), never formatted
//! into the text. The footprint polygon stays on the server in the session
//! variable `@poly`; it is cleared first so a pooled session can never
//! answer with the previous exposure's polygon.

/// Clears any polygon left over in the session.
pub const RESET_FOOTPRINT: &str = "SET @poly = NULL";

/// Binds: exposure id.
pub const SELECT_FOOTPRINT: &str = "SELECT poly FROM Science_Ccd_Exposure \
     WHERE scienceCcdExposureId = ? INTO @poly";

/// Returns 1 when the lookup found a polygon.
pub const FOOTPRINT_LOADED: &str = "SELECT @poly IS NOT NULL";

/// Second argument of the region procedure. Fixed; matches the `htmId20`
/// index column the join ranges over.
pub const REGION_PADDING: i32 = 20;

/// Binds: [`REGION_PADDING`]. Fills the `Region` table with `htmMin`/`htmMax` ranges.
pub const BUILD_REGION: &str = "CALL scisql.scisql_s2CPolyRegion(@poly, ?)";

/// Coarse HTM range pruning, then the exact point-in-polygon test.
pub const SELECT_SOURCES_IN_REGION: &str = "SELECT objectId, ra, `dec` FROM Object, Region \
     WHERE Object.htmId20 BETWEEN Region.htmMin AND Region.htmMax \
     AND scisql_s2PtInCPoly(Object.ra_PS, Object.decl_PS, @poly) = 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_bound() {
        assert!(SELECT_FOOTPRINT.ends_with("scienceCcdExposureId = ? INTO @poly"));
        assert!(BUILD_REGION.contains("(@poly, ?)"));
        assert!(!SELECT_SOURCES_IN_REGION.contains('?'));
    }

    #[test]
    fn test_region_join_uses_htm_range() {
        assert!(SELECT_SOURCES_IN_REGION
            .contains("Object.htmId20 BETWEEN Region.htmMin AND Region.htmMax"));
        assert!(SELECT_SOURCES_IN_REGION
            .contains("scisql_s2PtInCPoly(Object.ra_PS, Object.decl_PS, @poly) = 1"));
    }

    #[test]
    fn test_line_continuations_keep_spaces() {
        for stmt in [SELECT_FOOTPRINT, SELECT_SOURCES_IN_REGION] {
            assert!(!stmt.contains("  "), "double space in {:?}", stmt);
            assert!(!stmt.contains('\n'));
        }
    }
}
