use clap::{Parser, Subcommand};
use covidplot_core::loader::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use std::path::PathBuf;

/// CLI arguments for covidplot
#[derive(Debug, Parser)]
#[command(
    name = "covidplot",
    version,
    about = "Fetch per-country COVID-19 cases and plot them on a map"
)]
pub struct CliArgs {
    /// Read a saved /v1/cases body (.json or .json.gz) instead of calling the API
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// covid-api endpoint returning all countries
    #[arg(long = "base-url", global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every country name the data source accepts
    Countries {
        /// Only names containing this text (case- and accent-insensitive)
        #[arg(short = 'f', long)]
        filter: Option<String>,
    },

    /// Print one row per province of a country
    Table {
        /// Country name, any capitalization (e.g. trinidad and tobago)
        #[arg(required = true, num_args = 1..)]
        country: Vec<String>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an interactive map of a country's provinces as HTML
    Plot {
        /// Country name, any capitalization (e.g. guinea-bissau)
        #[arg(required = true, num_args = 1..)]
        country: Vec<String>,

        /// Output file (default: covid-<country>.html)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Marker color
        #[arg(long)]
        color: Option<String>,

        /// Initial map zoom
        #[arg(long)]
        zoom: Option<f64>,
    },
}
