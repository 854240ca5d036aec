// crates/covidplot-core/src/loader/http.rs
use super::SourceConfig;
use crate::error::{DataSourceError, Result};
use crate::model::raw::{expect_object, CountriesPayload, ProvinceMap};
use crate::normalize::CanonicalCountryName;
use crate::traits::CaseSource;
use reqwest::blocking::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// The live covid-api, one blocking request per call.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: SourceConfig,
}

impl HttpSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(std::time::Duration::from_secs(10)))
            .build()
            .map_err(DataSourceError::from)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn get_object(&self, url: &str, what: &str) -> std::result::Result<Map<String, Value>, DataSourceError> {
        debug!(url, "requesting case data");
        let body = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()?
            .error_for_status()?
            .bytes()?;
        let value: Value = serde_json::from_slice(&body)?;
        expect_object(value, what).inspect_err(|e| {
            if let DataSourceError::Api(msg) = e {
                warn!(url, message = %msg, "covid-api rejected the request");
            }
        })
    }
}

impl CaseSource for HttpSource {
    fn source_name(&self) -> &str {
        "covid-api"
    }

    fn fetch_all(&self) -> Result<CountriesPayload> {
        Ok(self.get_object(&self.config.base_url, "cases")?)
    }

    fn fetch_country(&self, country: &CanonicalCountryName) -> Result<ProvinceMap> {
        let url = self.config.country_url(country);
        Ok(self.get_object(&url, country.as_str())?)
    }
}
