// crates/covidplot-core/src/model/convert.rs
use super::raw::{
    ProvinceMap, FIELD_CONFIRMED, FIELD_DEATHS, FIELD_LAT, FIELD_LONG, FIELD_RECOVERED,
    UNKNOWN_PROVINCE,
};
use super::table::{CaseRow, CaseTable};
use crate::error::{CovidError, Result};
use crate::text::parse_coordinate;
use serde_json::{Map, Number, Value};
use tracing::{debug, info};

/// **Row Builder:** nested provinces -> flat case table.
///
/// Walks the provinces in payload order, skips the `"Unknown"` bucket and
/// emits one [`CaseRow`] per remaining province. Counters are copied as-is
/// (any JSON number);
/// `lat`/`long` are parsed into `f64`.
///
/// # Errors
///
/// - [`CovidError::MalformedRecord`] if a record is not an object, lacks one
///   of `confirmed`, `recovered`, `deaths`, `lat`, `long`, or has a
///   counter that is not a JSON number.
/// - [`CovidError::InvalidCoordinate`] if `lat`/`long` is not a decimal.
///
/// # Examples
///
/// ```rust
/// use covidplot_core::build_table;
/// use serde_json::json;
///
/// let records = json!({
///     "Unknown": { "confirmed": 3, "recovered": 0, "deaths": 0, "lat": "", "long": "" },
///     "ProvinceA": { "confirmed": 5, "recovered": 2, "deaths": 1, "lat": "10.5", "long": "20.25" }
/// });
/// let table = build_table(records.as_object().unwrap()).unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.rows()[0].lat, 10.5);
/// assert_eq!(table.rows()[0].lon, 20.25);
/// ```
pub fn build_table(records: &ProvinceMap) -> Result<CaseTable> {
    let mut rows = Vec::with_capacity(records.len());

    for (province, record) in records {
        if province == UNKNOWN_PROVINCE {
            debug!("skipping unattributed cases");
            continue;
        }

        let fields = record
            .as_object()
            .ok_or_else(|| malformed(province, "<record>"))?;

        rows.push(CaseRow {
            province: province.clone(),
            confirmed: counter(province, fields, FIELD_CONFIRMED)?,
            recovered: counter(province, fields, FIELD_RECOVERED)?,
            deaths: counter(province, fields, FIELD_DEATHS)?,
            lat: coordinate(province, fields, FIELD_LAT)?,
            lon: coordinate(province, fields, FIELD_LONG)?,
        });
    }

    info!(rows = rows.len(), "case table built");
    Ok(CaseTable::new(rows))
}

fn field<'a>(province: &str, fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    fields.get(name).ok_or_else(|| malformed(province, name))
}

fn counter(province: &str, fields: &Map<String, Value>, name: &str) -> Result<Number> {
    match field(province, fields, name)? {
        Value::Number(n) => Ok(n.clone()),
        _ => Err(malformed(province, name)),
    }
}

fn coordinate(province: &str, fields: &Map<String, Value>, name: &str) -> Result<f64> {
    let raw = field(province, fields, name)?;
    parse_coordinate(raw).ok_or_else(|| CovidError::InvalidCoordinate {
        province: province.to_string(),
        field: name.to_string(),
        value: raw.to_string(),
    })
}

fn malformed(province: &str, field: &str) -> CovidError {
    CovidError::MalformedRecord {
        province: province.to_string(),
        field: field.to_string(),
    }
}
