// crates/covidplot-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a case table.
///
/// Returned by [`CaseTable::totals`](crate::CaseTable::totals); the counts
/// reflect the rows after the `Unknown` bucket was dropped. Sums are `f64`
/// because the counters are unvalidated JSON numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseTotals {
    pub provinces: usize,
    pub confirmed: f64,
    pub recovered: f64,
    pub deaths: f64,
}
