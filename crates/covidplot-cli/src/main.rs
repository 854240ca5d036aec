//! covidplot — Command-line interface for covidplot-core
//!
//! This binary fetches per-country COVID-19 case data from the public
//! covid-api, prints it as a province table, or writes an interactive map.
//!
//! Usage examples
//! --------------
//!
//! - List all countries (optionally filtered)
//!   $ covidplot countries
//!   $ covidplot countries --filter korea
//!
//! - Print the provinces of a country (any capitalization)
//!   $ covidplot table trinidad and tobago
//!   $ covidplot table us --json
//!
//! - Plot a country on an OpenStreetMap background
//!   $ covidplot plot guinea-bissau --output gb.html
//!
//! Data source
//! -----------
//!
//! By default every command queries `https://covid-api.mmediagroup.fr/v1/cases`.
//! Use `--input <path>` to read a saved response (`.json` or `.json.gz`)
//! instead, e.g. when the API is unreachable.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{Context as _, Result};
use clap::Parser;
use covidplot_core::text::{filter_countries, fold_key};
use covidplot_core::{
    CaseSource, CountryCases, CovidError, Normalizer, PlotConfig, SnapshotSource,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const EXIT_INVALID_INPUT: u8 = 3;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let source = open_source(&args)?;
    debug!(source = source.source_name(), "data source ready");

    match args.command {
        Commands::Countries { filter } => {
            let names = source
                .known_countries()
                .context("list available countries")?;
            for name in filter_countries(&names, filter.as_deref().unwrap_or("")) {
                println!("{name}");
            }
        }

        Commands::Table { country, json } => {
            let Some(cases) = fetch_cases(&*source, &country.join(" "))? else {
                return Ok(ExitCode::from(EXIT_INVALID_INPUT));
            };
            if json {
                println!("{}", serde_json::to_string_pretty(cases.table())?);
            } else {
                print_table(&cases);
            }
        }

        Commands::Plot {
            country,
            output,
            color,
            zoom,
        } => {
            let Some(cases) = fetch_cases(&*source, &country.join(" "))? else {
                return Ok(ExitCode::from(EXIT_INVALID_INPUT));
            };
            let defaults = PlotConfig::default();
            let config = PlotConfig {
                marker_color: color.unwrap_or(defaults.marker_color),
                zoom: zoom.unwrap_or(defaults.zoom),
                ..defaults
            };
            let path = output.unwrap_or_else(|| default_plot_path(cases.country().as_str()));
            cases
                .write_html(&path, &config)
                .with_context(|| format!("write plot to {}", path.display()))?;
            println!("✓ Plot of {} written to {}", cases.country(), path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn open_source(args: &CliArgs) -> Result<Box<dyn CaseSource>> {
    if let Some(path) = &args.input {
        let snapshot = SnapshotSource::open(path)
            .with_context(|| format!("open snapshot {}", path.display()))?;
        return Ok(Box::new(snapshot));
    }
    http_source(args)
}

#[cfg(feature = "http")]
fn http_source(args: &CliArgs) -> Result<Box<dyn CaseSource>> {
    use covidplot_core::{HttpSource, SourceConfig};
    use std::time::Duration;

    let config = SourceConfig::default()
        .with_base_url(args.base_url.as_str())
        .with_timeout(Duration::from_secs(args.timeout));
    Ok(Box::new(
        HttpSource::new(config).context("build http client")?,
    ))
}

#[cfg(not(feature = "http"))]
fn http_source(_args: &CliArgs) -> Result<Box<dyn CaseSource>> {
    anyhow::bail!("built without the 'http' feature; pass --input <snapshot>")
}

/// Runs the pipeline. Input errors are reported together with the valid
/// names and yield `None`; anything else is an error.
fn fetch_cases(source: &dyn CaseSource, query: &str) -> Result<Option<CountryCases>> {
    match CountryCases::fetch(source, &Normalizer::default(), query) {
        Ok(cases) => Ok(Some(cases)),
        Err(CovidError::Input { error, valid }) => {
            eprintln!("{error}");
            println!("No valid input. You could try:");
            for name in &valid {
                println!("    {name}");
            }
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("fetch cases for '{query}'")),
    }
}

fn print_table(cases: &CountryCases) {
    println!("Cases in {}:", cases.country());
    println!(
        "{:<32} {:>12} {:>12} {:>10} {:>10} {:>10}",
        "province", "confirmed", "recovered", "deaths", "lat", "lon"
    );
    for row in cases.table() {
        // Number's Display ignores width, so pad the rendered text
        println!(
            "{:<32} {:>12} {:>12} {:>10} {:>10.4} {:>10.4}",
            row.province,
            row.confirmed.to_string(),
            row.recovered.to_string(),
            row.deaths.to_string(),
            row.lat,
            row.lon
        );
    }
    let totals = cases.table().totals();
    println!(
        "{:<32} {:>12} {:>12} {:>10}",
        format!("total ({} provinces)", totals.provinces),
        totals.confirmed,
        totals.recovered,
        totals.deaths
    );
}

fn default_plot_path(country: &str) -> PathBuf {
    let slug: String = fold_key(country)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    PathBuf::from(format!("covid-{}.html", slug.trim_matches('-')))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
