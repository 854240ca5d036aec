// crates/covidplot-core/src/lib.rs

//! # covidplot-core
//!
//! Per-country COVID-19 case data from the public covid-api
//! (<https://covid-api.mmediagroup.fr/v1/cases>), flattened into a table and
//! plotted on a map.
//!
//! ```no_run
//! use covidplot_core::prelude::*;
//!
//! let source = HttpSource::new(SourceConfig::default())?;
//! let cases = CountryCases::fetch(&source, &Normalizer::default(), "trinidad and tobago")?;
//! for row in cases.table() {
//!     println!("{}: {} confirmed", row.province, row.confirmed);
//! }
//! cases.write_html("trinidad.html", &PlotConfig::default())?;
//! # Ok::<(), covidplot_core::CovidError>(())
//! ```

pub mod cases;
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod render;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::cases::CountryCases;
pub use crate::common::CaseTotals;
pub use crate::error::{CovidError, DataSourceError, NormalizeError, Result};
#[cfg(feature = "http")]
pub use crate::loader::HttpSource;
pub use crate::loader::{SnapshotSource, SourceConfig};
pub use crate::model::{build_table, CaseRow, CaseTable, CountriesPayload, ProvinceMap};
pub use crate::normalize::{CanonicalCountryName, Normalizer};
pub use crate::render::PlotConfig;
pub use crate::traits::CaseSource;

pub mod prelude {
    pub use crate::{
        build_table, CanonicalCountryName, CaseRow, CaseSource, CaseTable, CaseTotals,
        CountryCases, CovidError, Normalizer, PlotConfig, Result, SnapshotSource, SourceConfig,
    };
    #[cfg(feature = "http")]
    pub use crate::HttpSource;
}
