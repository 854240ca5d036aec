// crates/covidplot-core/src/traits.rs
use crate::error::Result;
use crate::model::raw::{country_names, CountriesPayload, ProvinceMap};
use crate::normalize::CanonicalCountryName;

/// Where case data comes from.
///
/// Implementors provide the two covid-api calls; everything above them
/// (normalization, row building, rendering) is independent of transport.
/// The crate ships [`HttpSource`](crate::loader::HttpSource) for the live
/// API and [`SnapshotSource`](crate::loader::SnapshotSource) for a saved
/// payload.
pub trait CaseSource {
    /// Short label for logs and diagnostics.
    fn source_name(&self) -> &str;

    /// Every supported country mapped to its provinces.
    fn fetch_all(&self) -> Result<CountriesPayload>;

    /// The provinces of one country.
    fn fetch_country(&self, country: &CanonicalCountryName) -> Result<ProvinceMap>;

    /// Canonical country names the source accepts, in payload order.
    fn known_countries(&self) -> Result<Vec<String>> {
        let payload = self.fetch_all()?;
        Ok(country_names(&payload)?)
    }
}
