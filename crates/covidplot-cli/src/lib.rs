//! covidplot-cli
//! =============
//!
//! Command-line interface for the `covidplot-core` crate.
//!
//! This crate primarily provides a binary (`covidplot`). The library target
//! only carries this overview.
//!
//! Basic usage:
//!
//! ```text
//! covidplot --help
//! covidplot countries --filter guinea
//! covidplot table trinidad and tobago
//! covidplot plot us --output us.html
//! covidplot --input cases.json.gz table "cote d'ivoire"
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`covidplot-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
