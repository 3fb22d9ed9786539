use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while exporting the site.
#[derive(Debug, thiserror::Error)]
pub enum PrerenderError {
    #[error("failed to read config {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize export manifest")]
    Manifest(#[from] serde_json::Error),
}
