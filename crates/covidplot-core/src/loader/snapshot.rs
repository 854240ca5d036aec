// crates/covidplot-core/src/loader/snapshot.rs
use super::common_io;
use crate::error::{DataSourceError, Result};
use crate::model::raw::{country_names, expect_object, CountriesPayload, ProvinceMap};
use crate::normalize::CanonicalCountryName;
use crate::traits::CaseSource;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// A saved `/v1/cases` body, served without touching the network.
///
/// Accepts plain `.json` and gzipped `.json.gz` files. Both trait calls
/// are answered from the same in-memory payload.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    label: String,
    payload: CountriesPayload,
}

impl SnapshotSource {
    /// Loads a snapshot from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading snapshot");
        let reader = common_io::open_stream(path)?;
        let value: Value = serde_json::from_reader(reader).map_err(DataSourceError::Json)?;
        Self::from_value(value, path.display().to_string())
    }

    /// Wraps an already parsed payload after checking its shape.
    pub fn from_value(value: Value, label: impl Into<String>) -> Result<Self> {
        let payload = expect_object(value, "snapshot")?;
        country_names(&payload)?;
        Ok(Self {
            label: label.into(),
            payload,
        })
    }

    pub fn payload(&self) -> &CountriesPayload {
        &self.payload
    }
}

impl CaseSource for SnapshotSource {
    fn source_name(&self) -> &str {
        &self.label
    }

    fn fetch_all(&self) -> Result<CountriesPayload> {
        Ok(self.payload.clone())
    }

    fn fetch_country(&self, country: &CanonicalCountryName) -> Result<ProvinceMap> {
        match self.payload.get(country.as_str()) {
            Some(Value::Object(provinces)) => Ok(provinces.clone()),
            _ => Err(DataSourceError::Api(format!("{country} not found in {}", self.label)).into()),
        }
    }

    fn known_countries(&self) -> Result<Vec<String>> {
        Ok(self.payload.keys().cloned().collect())
    }
}
