//! Umbrella crate for the covidplot workspace.
//!
//! Re-exports [`covidplot_core`] so tooling at the workspace root can use
//! `covidplot_rs::prelude::*` without naming the member crate.
pub use covidplot_core::*;
