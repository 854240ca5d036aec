// crates/covidplot-core/src/render.rs

//! # Plot Renderer
//!
//! Turns a [`CaseTable`] into a standalone HTML page with an interactive
//! plotly.js `scattermapbox` figure: one marker per province, the province
//! name as hover title and the three counters as hover data.

use crate::error::{CovidError, Result};
use crate::model::CaseTable;
use crate::normalize::CanonicalCountryName;
use askama::Template;
use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};
use std::path::Path;
use tracing::info;

pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Fixed look of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub marker_color: String,
    pub zoom: f64,
    /// Figure height in pixels.
    pub height: u32,
    /// Map tile style; `open-street-map` needs no Mapbox token.
    pub map_style: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            marker_color: "fuchsia".to_string(),
            zoom: 3.0,
            height: 300,
            map_style: "open-street-map".to_string(),
        }
    }
}

/// The plotly figure (`{"data": [...], "layout": {...}}`) for a table.
///
/// # Errors
///
/// [`CovidError::Render`] for an empty table, which has nothing to centre
/// the map on.
pub fn figure(country: &CanonicalCountryName, table: &CaseTable, config: &PlotConfig) -> Result<Value> {
    let (center_lat, center_lon) = table
        .center()
        .ok_or_else(|| CovidError::Render(format!("no provinces to plot for {country}")))?;

    let rows = table.rows();
    let lat: Vec<f64> = rows.iter().map(|r| r.lat).collect();
    let lon: Vec<f64> = rows.iter().map(|r| r.lon).collect();
    let names: Vec<&str> = rows.iter().map(|r| r.province.as_str()).collect();
    let counters: Vec<[&Number; 3]> = rows
        .iter()
        .map(|r| [&r.confirmed, &r.recovered, &r.deaths])
        .collect();

    Ok(json!({
        "data": [{
            "type": "scattermapbox",
            "mode": "markers",
            "name": country.as_str(),
            "lat": lat,
            "lon": lon,
            "hovertext": names,
            "customdata": counters,
            "hovertemplate": "<b>%{hovertext}</b><br><br>\
                confirmed=%{customdata[0]}<br>\
                recovered=%{customdata[1]}<br>\
                deaths=%{customdata[2]}<br>\
                lat=%{lat}<br>lon=%{lon}<extra></extra>",
            "marker": { "color": config.marker_color },
        }],
        "layout": {
            "height": config.height,
            "showlegend": false,
            "margin": { "r": 0, "t": 0, "l": 0, "b": 0 },
            "mapbox": {
                "style": config.map_style,
                "zoom": config.zoom,
                "center": { "lat": center_lat, "lon": center_lon },
            },
        },
    }))
}

/// The page around the figure. `title` is escaped by the template,
/// `fig_json` must already be safe to embed in a `<script>` block.
#[derive(Template)]
#[template(path = "plot.html")]
struct PlotPage<'a> {
    title: &'a str,
    fig_json: String,
    plotly_url: &'a str,
}

/// A self-contained HTML page showing the figure.
pub fn render_html(
    country: &CanonicalCountryName,
    table: &CaseTable,
    config: &PlotConfig,
) -> Result<String> {
    let fig = figure(country, table, config)?;
    let fig_json = serde_json::to_string(&fig)
        .map_err(|e| CovidError::Render(e.to_string()))?
        // keep province names from closing the script tag
        .replace("</", "<\\/");

    let page = PlotPage {
        title: country.as_str(),
        fig_json,
        plotly_url: PLOTLY_JS_URL,
    };
    page.render().map_err(|e| CovidError::Render(e.to_string()))
}

pub fn write_html(
    path: impl AsRef<Path>,
    country: &CanonicalCountryName,
    table: &CaseTable,
    config: &PlotConfig,
) -> Result<()> {
    let path = path.as_ref();
    let html = render_html(country, table, config)?;
    std::fs::write(path, html)?;
    info!(path = %path.display(), markers = table.len(), "plot written");
    Ok(())
}
