//! Reading and writing the farms file.
//!
//! Farms stay as raw JSON values so every field the site uses survives a
//! run untouched and in its original order. `FarmRecord` is the only way the
//! rest of the crate looks inside a record.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "public/data/farms.uk.json";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path:?} must contain a JSON array of farms")]
    NotAnArray { path: PathBuf },
    #[error("failed to serialize farms")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn load(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: Value = serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match parsed {
        Value::Array(farms) => Ok(farms),
        _ => Err(DatasetError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Pretty-print (two-space indent, UTF-8 kept as-is) and overwrite `path` in
/// one write.
pub fn save(path: &Path, farms: &[Value]) -> Result<(), DatasetError> {
    let body = serde_json::to_vec_pretty(farms).map_err(DatasetError::Serialize)?;
    fs::write(path, body).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// What a farm's `location.county` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum County<'a> {
    /// Absent, `null` or whitespace only. The only state that may be filled.
    Blank,
    Named(&'a str),
    /// Present but not a string. Left alone like any other populated value.
    Unreadable,
}

impl County<'_> {
    pub fn is_blank(&self) -> bool {
        matches!(self, County::Blank)
    }
}

/// Lenient view over one farm. Missing or oddly shaped text fields read as `""`.
pub struct FarmRecord<'a> {
    value: &'a mut Value,
}

impl<'a> FarmRecord<'a> {
    pub fn new(value: &'a mut Value) -> Self {
        FarmRecord { value }
    }

    pub fn name(&self) -> &str {
        str_field(self.value.as_object(), "name")
    }

    pub fn city(&self) -> &str {
        str_field(self.location(), "city")
    }

    pub fn county(&self) -> County<'_> {
        match self.location().and_then(|loc| loc.get("county")) {
            None | Some(Value::Null) => County::Blank,
            Some(Value::String(s)) if s.trim().is_empty() => County::Blank,
            Some(Value::String(s)) => County::Named(s),
            Some(_) => County::Unreadable,
        }
    }

    /// Returns false when there is no `location` object to write into.
    pub fn set_county(&mut self, county: &str) -> bool {
        match self
            .value
            .as_object_mut()
            .and_then(|farm| farm.get_mut("location"))
            .and_then(Value::as_object_mut)
        {
            Some(location) => {
                location.insert("county".to_string(), Value::String(county.to_string()));
                true
            }
            None => false,
        }
    }

    fn location(&self) -> Option<&Map<String, Value>> {
        self.value
            .as_object()
            .and_then(|farm| farm.get("location"))
            .and_then(Value::as_object)
    }
}

fn str_field<'v>(obj: Option<&'v Map<String, Value>>, key: &str) -> &'v str {
    obj.and_then(|o| o.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
}
