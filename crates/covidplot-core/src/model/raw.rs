// crates/covidplot-core/src/model/raw.rs

//! Raw payload shapes as they come from the covid-api.
//!
//! `GET /v1/cases` answers with every country:
//!
//! ```json
//! { "France": { "All": { "confirmed": 5, ... }, "Guadeloupe": { ... } }, ... }
//! ```
//!
//! and `GET /v1/cases?country=France` with one country's provinces:
//!
//! ```json
//! { "All": { "confirmed": 5, "recovered": 2, "deaths": 1, "lat": "46.2", "long": "2.2" }, ... }
//! ```
//!
//! The records stay untyped (`serde_json::Value`) so the row builder can
//! name the exact field and province that is missing or malformed.
use crate::error::DataSourceError;
use serde_json::{Map, Value};

/// Province key the API uses for cases it cannot attribute to a region.
pub const UNKNOWN_PROVINCE: &str = "Unknown";

pub const FIELD_CONFIRMED: &str = "confirmed";
pub const FIELD_RECOVERED: &str = "recovered";
pub const FIELD_DEATHS: &str = "deaths";
pub const FIELD_LAT: &str = "lat";
pub const FIELD_LONG: &str = "long";

/// Province name -> raw record, in payload order.
pub type ProvinceMap = Map<String, Value>;

/// Country name -> provinces, in payload order.
pub type CountriesPayload = Map<String, Value>;

/// Checks that a parsed body is a JSON object and hands it back as a map.
///
/// The API reports a bad `country` parameter as `{"message": "..."}` with a
/// 200 status, so that shape is turned into [`DataSourceError::Api`].
pub fn expect_object(value: Value, what: &str) -> Result<Map<String, Value>, DataSourceError> {
    match value {
        Value::Object(map) => {
            if map.len() == 1 {
                if let Some(Value::String(msg)) = map.get("message") {
                    return Err(DataSourceError::Api(msg.clone()));
                }
            }
            Ok(map)
        }
        other => Err(DataSourceError::Shape(format!(
            "{what} must be a JSON object, got {}",
            crate::text::json_kind(&other)
        ))),
    }
}

/// Country names of a full payload, in payload order.
///
/// Every entry must itself be an object of provinces.
pub fn country_names(payload: &CountriesPayload) -> Result<Vec<String>, DataSourceError> {
    payload
        .iter()
        .map(|(name, provinces)| {
            if provinces.is_object() {
                Ok(name.clone())
            } else {
                Err(DataSourceError::Shape(format!(
                    "country '{name}' must map to an object of provinces"
                )))
            }
        })
        .collect()
}
