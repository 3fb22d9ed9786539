//! Configuration file support for the static export.
//!
//! Loads an optional `bitlabq.toml`. Every key has a default, so a missing
//! file or an empty one yields [`PrerenderConfig::default`].

use std::path::{Path, PathBuf};

use bitlabq_landing::DocumentOptions;
use serde::Deserialize;

use crate::error::PrerenderError;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "bitlabq.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrerenderConfig {
    /// Directory the HTML files are written to.
    pub out_dir: PathBuf,
    /// `href` of the compiled stylesheet linked from every page.
    pub stylesheet: String,
    /// Pin the copyright year for reproducible output.
    pub year: Option<i32>,
    /// Also write `404.html`.
    pub not_found_page: bool,
    /// Also write `manifest.json`.
    pub manifest: bool,
}

impl Default for PrerenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            stylesheet: DocumentOptions::default().stylesheet,
            year: None,
            not_found_page: true,
            manifest: true,
        }
    }
}

impl PrerenderConfig {
    /// Load config from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, PrerenderError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|source| PrerenderError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| PrerenderError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Options handed to the document renderer.
    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            stylesheet: self.stylesheet.clone(),
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PrerenderConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, PrerenderConfig::default());
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert!(config.not_found_page && config.manifest);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "out_dir = \"public\"\nyear = 2030\n");

        let config = PrerenderConfig::load(&path).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert_eq!(config.year, Some(2030));
        assert_eq!(config.stylesheet, "/assets/site.css");
        assert!(config.manifest);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "out_dir = [1, 2");

        let err = PrerenderConfig::load(&path).unwrap_err();
        assert!(matches!(err, PrerenderError::ParseConfig { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "outdir = \"typo\"\n");

        assert!(matches!(
            PrerenderConfig::load(&path),
            Err(PrerenderError::ParseConfig { .. })
        ));
    }

    #[test]
    fn document_options_follow_config() {
        let config = PrerenderConfig {
            stylesheet: "/css/app.css".into(),
            year: Some(2029),
            ..Default::default()
        };
        let options = config.document_options();
        assert_eq!(options.stylesheet, "/css/app.css");
        assert_eq!(options.year, Some(2029));
    }
}
