//! Data references: the keys that identify one unit of pipeline input.
//!
//! A pipeline hands each task a data reference; this crate only needs the
//! integer `ccdExposureId` from it. [`DataId`] is a plain key → integer map
//! that can be built from `key=value` strings on the command line.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{RefError, RefResult};

/// Data id key naming a row of `Science_Ccd_Exposure`.
pub const CCD_EXPOSURE_ID_KEY: &str = "ccdExposureId";

/// Opaque key of one CCD exposure in the catalog database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExposureId(pub i64);

impl fmt::Display for ExposureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExposureId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

pub trait DataReference {
    fn get(&self, key: &str) -> Option<i64>;

    /// The exposure this reference points at.
    ///
    /// # Errors
    /// [`RefError::MissingDataId`] if `ccdExposureId` is absent.
    fn ccd_exposure_id(&self) -> RefResult<ExposureId> {
        self.get(CCD_EXPOSURE_ID_KEY)
            .map(ExposureId)
            .ok_or_else(|| RefError::missing_data_id(CCD_EXPOSURE_ID_KEY))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataId {
    values: BTreeMap<String, i64>,
}

impl DataId {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data id holding only `ccdExposureId`.
    pub fn for_exposure(exposure_id: ExposureId) -> Self {
        let mut id = Self::new();
        id.insert(CCD_EXPOSURE_ID_KEY, exposure_id.0);
        id
    }

    pub fn insert(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(key.into(), value)
    }

    /// Merges `key=value` entries; later entries win.
    pub fn parse_entries<S: AsRef<str>>(entries: &[S]) -> RefResult<Self> {
        let mut id = Self::new();
        for entry in entries {
            let (key, value) = parse_entry(entry.as_ref())?;
            id.insert(key, value);
        }
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl DataReference for DataId {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }
}

impl FromStr for DataId {
    type Err = RefError;

    /// Parses whitespace- or comma-separated `key=value` entries.
    fn from_str(s: &str) -> RefResult<Self> {
        let entries: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|e| !e.is_empty())
            .collect();
        Self::parse_entries(&entries)
    }
}

impl fmt::Display for DataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.values {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

fn parse_entry(entry: &str) -> RefResult<(String, i64)> {
    let invalid = |message: &str| RefError::InvalidDataId {
        entry: entry.to_string(),
        message: message.to_string(),
    };

    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| invalid("expected key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid("empty key"));
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid(&e.to_string()))?;

    Ok((key.to_string(), value))
}
