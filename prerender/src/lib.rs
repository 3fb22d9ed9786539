//! # bitlabq-prerender
//!
//! Static export for the BitLabQ site: renders every route with the
//! `bitlabq-landing` SSR renderer and writes one HTML file per route, plus a
//! `404.html` and a JSON manifest.

pub mod config;
pub mod error;
pub mod export;

pub use config::{DEFAULT_CONFIG_FILE, PrerenderConfig};
pub use error::PrerenderError;
pub use export::{ExportReport, ExportedPage, export_site, route_file, selected_routes};
