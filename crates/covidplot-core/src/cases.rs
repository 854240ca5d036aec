// crates/covidplot-core/src/cases.rs
use crate::error::{CovidError, NormalizeError, Result};
use crate::model::{build_table, CaseTable};
use crate::normalize::{CanonicalCountryName, Normalizer};
use crate::render::{self, PlotConfig};
use crate::traits::CaseSource;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// The case table of one country, built once from one query.
///
/// `fetch` runs the whole pipeline against a [`CaseSource`]:
/// list the valid countries, normalize the query against them, fetch the
/// provinces of the match and flatten them into a [`CaseTable`]. Nothing is
/// shared between instances.
#[derive(Debug, Clone)]
pub struct CountryCases {
    country: CanonicalCountryName,
    table: CaseTable,
}

impl CountryCases {
    /// # Errors
    ///
    /// [`CovidError::Input`] if the query does not name a known country; the
    /// error carries the valid names so callers can offer them.
    ///
    /// ```rust
    /// use covidplot_core::{CountryCases, Normalizer, SnapshotSource};
    /// use serde_json::json;
    ///
    /// let source = SnapshotSource::from_value(json!({
    ///     "Guinea-Bissau": {
    ///         "All": { "confirmed": 9, "recovered": 8, "deaths": 1, "lat": "11.8", "long": "-15.2" }
    ///     }
    /// }), "inline").unwrap();
    ///
    /// let cases = CountryCases::fetch(&source, &Normalizer::default(), "guinea-bissau").unwrap();
    /// assert_eq!(cases.country().as_str(), "Guinea-Bissau");
    /// assert_eq!(cases.table().len(), 1);
    /// ```
    pub fn fetch<S>(source: &S, normalizer: &Normalizer, query: &str) -> Result<Self>
    where
        S: CaseSource + ?Sized,
    {
        Self::fetch_with(source, |valid| normalizer.normalize(query, valid))
    }

    /// Like [`CountryCases::fetch`] for untyped input; non-strings fail with
    /// [`NormalizeError::InvalidType`].
    pub fn fetch_value<S>(source: &S, normalizer: &Normalizer, query: &Value) -> Result<Self>
    where
        S: CaseSource + ?Sized,
    {
        Self::fetch_with(source, |valid| normalizer.normalize_value(query, valid))
    }

    fn fetch_with<S, F>(source: &S, normalize: F) -> Result<Self>
    where
        S: CaseSource + ?Sized,
        F: FnOnce(&[String]) -> std::result::Result<CanonicalCountryName, NormalizeError>,
    {
        let valid = source.known_countries()?;
        let country = match normalize(&valid) {
            Ok(country) => country,
            Err(error) => return Err(CovidError::Input { error, valid }),
        };
        debug!(%country, source = source.source_name(), "fetching provinces");

        let provinces = source.fetch_country(&country)?;
        let table = build_table(&provinces)?;
        Ok(Self { country, table })
    }

    pub fn country(&self) -> &CanonicalCountryName {
        &self.country
    }

    pub fn table(&self) -> &CaseTable {
        &self.table
    }

    pub fn into_table(self) -> CaseTable {
        self.table
    }

    pub fn render_html(&self, config: &PlotConfig) -> Result<String> {
        render::render_html(&self.country, &self.table, config)
    }

    pub fn write_html(&self, path: impl AsRef<Path>, config: &PlotConfig) -> Result<()> {
        render::write_html(path, &self.country, &self.table, config)
    }
}
