// crates/covidplot-core/src/model/mod.rs
pub mod convert;
pub mod raw;
pub mod table;

pub use convert::build_table;
pub use raw::{CountriesPayload, ProvinceMap, UNKNOWN_PROVINCE};
pub use table::{CaseRow, CaseTable};
