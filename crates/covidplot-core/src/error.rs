// crates/covidplot-core/src/error.rs
use thiserror::Error;

/// Why a country query could not be turned into a canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The query was not a string (only reachable from untyped JSON input).
    #[error("country must be given as text, got {0}")]
    InvalidType(&'static str),
    #[error("country name is empty")]
    EmptyInput,
    #[error("unknown country: {candidate}")]
    UnknownCountry { candidate: String },
}

/// Failures of the external data provider.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[cfg(feature = "http")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Valid JSON, but not the `{ name: { ... } }` shape we expect.
    #[error("unexpected payload shape: {0}")]
    Shape(String),
    /// The API answered with its `{"message": ...}` error body.
    #[error("api error: {0}")]
    Api(String),
}

#[derive(Debug, Error)]
pub enum CovidError {
    /// The query failed normalization. `valid` lists every canonical name the
    /// data source currently knows, in payload order.
    #[error("{error}")]
    Input {
        error: NormalizeError,
        valid: Vec<String>,
    },

    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("province '{province}' has a missing or malformed field '{field}'")]
    MalformedRecord { province: String, field: String },

    #[error("province '{province}' has a non-numeric {field}: {value}")]
    InvalidCoordinate {
        province: String,
        field: String,
        value: String,
    },

    #[error("cannot render plot: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CovidError {
    /// The valid country names attached to an input error, if any.
    pub fn valid_countries(&self) -> Option<&[String]> {
        match self {
            CovidError::Input { valid, .. } => Some(valid),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CovidError>;
