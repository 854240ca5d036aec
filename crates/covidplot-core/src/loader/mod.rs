// crates/covidplot-core/src/loader/mod.rs

//! # Data Sources
//!
//! Handles the Physical Layer (HTTP, files, decompression) and hands raw
//! JSON maps to the model. Two sources exist:
//!
//! - [`HttpSource`]: the live covid-api (feature `http`).
//! - [`SnapshotSource`]: a saved `/v1/cases` body on disk or in memory.

use std::time::Duration;

mod common_io;
#[cfg(feature = "http")]
mod http;
mod snapshot;

#[cfg(feature = "http")]
pub use http::HttpSource;
pub use snapshot::SnapshotSource;

pub const DEFAULT_BASE_URL: &str = "https://covid-api.mmediagroup.fr/v1/cases";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("covidplot/", env!("CARGO_PKG_VERSION"));

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Connection settings for [`HttpSource`].
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Endpoint returning every country; `?country=` is appended for one.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl SourceConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The query URL for one country, e.g.
    /// `.../v1/cases?country=Trinidad%20and%20Tobago`.
    pub fn country_url(&self, country: &crate::CanonicalCountryName) -> String {
        format!(
            "{}?country={}",
            self.base_url.trim_end_matches('?'),
            country.query_escaped()
        )
    }
}
