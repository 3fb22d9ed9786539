//! Writes the rendered site to disk.
//!
//! Layout of the output directory:
//!
//! ```text
//! dist/
//! ├── index.html            /
//! ├── about/index.html      /about
//! ├── products/index.html   /products
//! ├── contact/index.html    /contact
//! ├── 404.html              router fallback
//! └── manifest.json         list of written pages
//! ```

use std::path::{Path, PathBuf};

use bitlabq_landing::{SiteRoute, render_not_found, render_page};
use serde::Serialize;

use crate::config::PrerenderConfig;
use crate::error::PrerenderError;

pub const NOT_FOUND_FILE: &str = "404.html";
pub const MANIFEST_FILE: &str = "manifest.json";

/// One file written by [`export_site`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedPage {
    /// Route path, `None` for the not-found page.
    pub route: Option<String>,
    /// Path relative to the output directory, `/`-separated.
    pub file: String,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    pub pages: Vec<ExportedPage>,
}

impl ExportReport {
    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|page| page.bytes).sum()
    }
}

/// Output file for a route, relative to the output directory.
pub fn route_file(route: SiteRoute) -> String {
    match route.path().trim_matches('/') {
        "" => "index.html".to_string(),
        segment => format!("{segment}/index.html"),
    }
}

/// Routes to export: all of them when `requested` is empty, otherwise
/// `requested` in first-seen order with repeats dropped.
pub fn selected_routes(requested: &[SiteRoute]) -> Vec<SiteRoute> {
    if requested.is_empty() {
        return SiteRoute::ALL.to_vec();
    }
    let mut routes = Vec::with_capacity(requested.len());
    for &route in requested {
        if !routes.contains(&route) {
            routes.push(route);
        }
    }
    routes
}

/// Render `routes` (all routes when empty) into `config.out_dir`.
pub fn export_site(
    config: &PrerenderConfig,
    routes: &[SiteRoute],
) -> Result<ExportReport, PrerenderError> {
    let routes = selected_routes(routes);
    let options = config.document_options();
    let mut report = ExportReport {
        out_dir: config.out_dir.clone(),
        pages: Vec::with_capacity(routes.len() + 1),
    };

    create_dir(&config.out_dir)?;

    for &route in &routes {
        let file = route_file(route);
        let html = render_page(route, &options);
        write_file(&config.out_dir, &file, &html)?;
        report.pages.push(ExportedPage {
            route: Some(route.path().to_string()),
            file,
            bytes: html.len(),
        });
    }

    if config.not_found_page {
        let html = render_not_found(&options);
        write_file(&config.out_dir, NOT_FOUND_FILE, &html)?;
        report.pages.push(ExportedPage {
            route: None,
            file: NOT_FOUND_FILE.to_string(),
            bytes: html.len(),
        });
    }

    if config.manifest {
        let json = serde_json::to_string_pretty(&report.pages)?;
        write_file(&config.out_dir, MANIFEST_FILE, &json)?;
    }

    Ok(report)
}

fn create_dir(dir: &Path) -> Result<(), PrerenderError> {
    std::fs::create_dir_all(dir).map_err(|source| PrerenderError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(out_dir: &Path, relative: &str, content: &str) -> Result<(), PrerenderError> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    std::fs::write(&path, content).map_err(|source| PrerenderError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(file = %path.display(), bytes = content.len(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> PrerenderConfig {
        PrerenderConfig {
            out_dir: dir.path().join("dist"),
            year: Some(2031),
            ..Default::default()
        }
    }

    #[test]
    fn route_files() {
        let files: Vec<String> = SiteRoute::ALL.into_iter().map(route_file).collect();
        assert_eq!(
            files,
            [
                "index.html",
                "about/index.html",
                "products/index.html",
                "contact/index.html"
            ]
        );
    }

    #[test]
    fn exports_every_route_plus_404_and_manifest() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let report = export_site(&config, &[]).unwrap();

        assert_eq!(report.pages.len(), 5);
        let out = &config.out_dir;
        for file in [
            "index.html",
            "about/index.html",
            "products/index.html",
            "contact/index.html",
            NOT_FOUND_FILE,
            MANIFEST_FILE,
        ] {
            assert!(out.join(file).is_file(), "missing {file}");
        }

        let about = std::fs::read_to_string(out.join("about/index.html")).unwrap();
        assert!(about.starts_with("<!DOCTYPE html>"));
        assert!(about.contains("© 2031 BitLabQ"));
    }

    #[test]
    fn manifest_lists_written_pages() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let report = export_site(&config, &[SiteRoute::Contact]).unwrap();

        let manifest = std::fs::read_to_string(config.out_dir.join(MANIFEST_FILE)).unwrap();
        let entries: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(entries[0]["route"], "/contact");
        assert_eq!(entries[0]["file"], "contact/index.html");
        assert_eq!(entries[0]["bytes"], report.pages[0].bytes);
        assert_eq!(entries[1]["route"], serde_json::Value::Null);
        assert_eq!(entries[1]["file"], NOT_FOUND_FILE);
    }

    #[test]
    fn selection_defaults_to_all_and_drops_repeats() {
        assert_eq!(selected_routes(&[]), SiteRoute::ALL);
        assert_eq!(
            selected_routes(&[SiteRoute::Contact, SiteRoute::Home, SiteRoute::Contact]),
            [SiteRoute::Contact, SiteRoute::Home]
        );
    }

    #[test]
    fn repeated_route_is_written_once() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let report = export_site(&config, &[SiteRoute::Home, SiteRoute::Home]).unwrap();

        let files: Vec<&str> = report.pages.iter().map(|page| page.file.as_str()).collect();
        assert_eq!(files, ["index.html", NOT_FOUND_FILE]);
        let manifest = std::fs::read_to_string(config.out_dir.join(MANIFEST_FILE)).unwrap();
        let entries: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(entries.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn route_selection_and_switches() {
        let dir = TempDir::new().unwrap();
        let config = PrerenderConfig {
            not_found_page: false,
            manifest: false,
            ..config_in(&dir)
        };

        let report = export_site(&config, &[SiteRoute::Home]).unwrap();

        assert_eq!(report.pages.len(), 1);
        assert!(config.out_dir.join("index.html").is_file());
        assert!(!config.out_dir.join("about").exists());
        assert!(!config.out_dir.join(NOT_FOUND_FILE).exists());
        assert!(!config.out_dir.join(MANIFEST_FILE).exists());
        assert_eq!(report.total_bytes(), report.pages[0].bytes);
    }

    #[test]
    fn unwritable_output_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = PrerenderConfig {
            out_dir: blocker.join("dist"),
            ..Default::default()
        };

        let err = export_site(&config, &[]).unwrap_err();
        assert!(matches!(err, PrerenderError::Write { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
