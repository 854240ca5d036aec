// crates/covidplot-core/src/model/table.rs
use crate::common::CaseTotals;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One province of a country, ready for plotting.
///
/// Counters keep the JSON number the API sent (integer or not).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseRow {
    pub province: String,
    pub confirmed: Number,
    pub recovered: Number,
    pub deaths: Number,
    pub lat: f64,
    pub lon: f64,
}

/// The flattened case data of one country.
///
/// Rows keep the order of the provinces in the source payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseTable {
    rows: Vec<CaseRow>,
}

impl CaseTable {
    pub fn new(rows: Vec<CaseRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CaseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseRow> {
        self.rows.iter()
    }

    pub fn find(&self, province: &str) -> Option<&CaseRow> {
        self.rows.iter().find(|r| r.province == province)
    }

    /// Summed counters over every row, accumulated as `f64` so huge or
    /// fractional counters never overflow.
    pub fn totals(&self) -> CaseTotals {
        self.rows.iter().fold(
            CaseTotals {
                provinces: self.rows.len(),
                ..CaseTotals::default()
            },
            |mut acc, r| {
                acc.confirmed += as_f64(&r.confirmed);
                acc.recovered += as_f64(&r.recovered);
                acc.deaths += as_f64(&r.deaths);
                acc
            },
        )
    }

    /// Mean latitude/longitude, `None` for an empty table.
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.rows.is_empty() {
            return None;
        }
        let n = self.rows.len() as f64;
        let (lat, lon) = self
            .rows
            .iter()
            .fold((0.0, 0.0), |(la, lo), r| (la + r.lat, lo + r.lon));
        Some((lat / n, lon / n))
    }
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or_default()
}

impl<'a> IntoIterator for &'a CaseTable {
    type Item = &'a CaseRow;
    type IntoIter = std::slice::Iter<'a, CaseRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
