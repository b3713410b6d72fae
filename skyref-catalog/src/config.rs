//! Database location.
//!
//! The full database location is `db_url + db_name`, concatenated verbatim.
//! Only `db_name` is checked here; URL well-formedness is left to the
//! driver and therefore surfaces when the connection is opened.
//!
//! ```
//! use skyref_catalog::RefConfig;
//!
//! let config = RefConfig::new("rplante_DC3b_u_pt11final").unwrap();
//! assert_eq!(
//!     config.full_url(),
//!     "mysql://lsst10.ncsa.uiuc.edu:3390/rplante_DC3b_u_pt11final"
//! );
//! assert!(RefConfig::new("").is_err());
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::{RefError, RefResult};

/// Database URL used when none is configured (without the trailing database name).
pub const DEFAULT_DB_URL: &str = "mysql://lsst10.ncsa.uiuc.edu:3390/";

#[derive(Debug, Clone, PartialEq)]
pub struct RefConfig {
    db_name: String,
    db_url: String,
}

/// On-disk shape; every load path goes through `RefConfig::from_raw` for validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRefConfig {
    #[serde(rename = "dbName", alias = "db_name")]
    db_name: Option<String>,
    #[serde(rename = "dbUrl", alias = "db_url", default = "default_db_url")]
    db_url: String,
}

fn default_db_url() -> String {
    DEFAULT_DB_URL.to_string()
}

impl RefConfig {
    /// Config for `db_name` on the default server.
    ///
    /// # Errors
    /// [`RefError::InvalidConfig`] if `db_name` is empty or blank.
    pub fn new(db_name: impl Into<String>) -> RefResult<Self> {
        Self::with_url(db_name, DEFAULT_DB_URL)
    }

    pub fn with_url(db_name: impl Into<String>, db_url: impl Into<String>) -> RefResult<Self> {
        let db_name = db_name.into();
        if db_name.trim().is_empty() {
            return Err(RefError::invalid_config(
                "dbName is required and has no default",
            ));
        }

        Ok(Self {
            db_name,
            db_url: db_url.into(),
        })
    }

    /// Loads a JSON document such as `{"dbName": "DC3b", "dbUrl": "mysql://host:3306/"}`.
    pub fn from_json_str(json: &str) -> RefResult<Self> {
        let raw: RawRefConfig = serde_json::from_str(json)
            .map_err(|e| RefError::invalid_config(format!("cannot parse config: {}", e)))?;
        Self::from_raw(raw)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> RefResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RefError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn db_url(&self) -> &str {
        &self.db_url
    }

    /// `db_url` followed directly by `db_name`.
    pub fn full_url(&self) -> String {
        format!("{}{}", self.db_url, self.db_name)
    }

    fn from_raw(raw: RawRefConfig) -> RefResult<Self> {
        let db_name = raw
            .db_name
            .ok_or_else(|| RefError::invalid_config("dbName is required and has no default"))?;
        Self::with_url(db_name, raw.db_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RefConfig::new("DC3b").unwrap();
        assert_eq!(config.db_url(), DEFAULT_DB_URL);
        assert_eq!(config.full_url(), "mysql://lsst10.ncsa.uiuc.edu:3390/DC3b");
    }

    #[test]
    fn test_blank_name_rejected() {
        for name in ["", "   "] {
            let err = RefConfig::new(name).unwrap_err();
            assert!(matches!(err, RefError::InvalidConfig { .. }));
        }
    }

    #[test]
    fn test_url_not_validated() {
        // Malformed locations are the driver's problem at connect time.
        let config = RefConfig::with_url("db", "not a url").unwrap();
        assert_eq!(config.full_url(), "not a urldb");
    }

    #[test]
    fn test_json_camel_case() {
        let config =
            RefConfig::from_json_str(r#"{"dbName": "DC3b", "dbUrl": "mysql://localhost:3306/"}"#)
                .unwrap();
        assert_eq!(config.full_url(), "mysql://localhost:3306/DC3b");
    }

    #[test]
    fn test_json_snake_case() {
        let config = RefConfig::from_json_str(r#"{"db_name": "DC3b"}"#).unwrap();
        assert_eq!(config.db_url(), DEFAULT_DB_URL);
    }

    #[test]
    fn test_json_padding_not_configurable() {
        let err = RefConfig::from_json_str(r#"{"dbName": "DC3b", "paddingArcsec": 30.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("paddingArcsec"), "{}", err);
    }

    #[test]
    fn test_json_missing_name() {
        let err = RefConfig::from_json_str(r#"{"dbUrl": "mysql://localhost:3306/"}"#).unwrap_err();
        assert!(err.to_string().contains("dbName is required"));
    }

    #[test]
    fn test_json_unknown_field() {
        let err = RefConfig::from_json_str(r#"{"dbName": "x", "dbPort": 3306}"#).unwrap_err();
        assert!(matches!(err, RefError::InvalidConfig { .. }));
    }

    #[test]
    fn test_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"dbName": "DC3b"}"#).unwrap();
        file.flush().unwrap();

        let config = RefConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.db_name(), "DC3b");
    }

    #[test]
    fn test_json_file_missing() {
        let err = RefConfig::from_json_file("/nonexistent/skyref.json").unwrap_err();
        assert!(matches!(err, RefError::Io { .. }));
    }
}
