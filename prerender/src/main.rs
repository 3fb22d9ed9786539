//! # bitlabq-prerender
//!
//! Renders the BitLabQ site to static HTML.
//!
//! ```bash
//! # Everything into ./dist (or whatever bitlabq.toml says)
//! bitlabq-prerender
//!
//! # Two pages, pinned year, custom output
//! bitlabq-prerender -o public --year 2025 -r / -r /contact
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bitlabq_landing::SiteRoute;
use bitlabq_prerender::{PrerenderConfig, export_site, selected_routes};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "bitlabq-prerender")]
#[command(about = "Render the BitLabQ site to static HTML files")]
#[command(version)]
struct Args {
    /// Config file (missing file = defaults)
    #[arg(short, long, default_value = bitlabq_prerender::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output directory (overrides `out_dir`)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Stylesheet href linked from every page (overrides `stylesheet`)
    #[arg(long)]
    stylesheet: Option<String>,

    /// Pin the copyright year instead of reading the clock
    #[arg(long)]
    year: Option<i32>,

    /// Only export these routes, e.g. `-r / -r /about` (default: all)
    #[arg(short, long = "route")]
    routes: Vec<SiteRoute>,

    /// Skip writing manifest.json
    #[arg(long)]
    no_manifest: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Command-line flags win over the config file.
    fn apply(&self, config: &mut PrerenderConfig) {
        if let Some(out_dir) = &self.out_dir {
            config.out_dir = out_dir.clone();
        }
        if let Some(stylesheet) = &self.stylesheet {
            config.stylesheet = stylesheet.clone();
        }
        if self.year.is_some() {
            config.year = self.year;
        }
        if self.no_manifest {
            config.manifest = false;
        }
    }
}

fn init_tracing(log_level: &str) {
    // Logs go to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut config = PrerenderConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    args.apply(&mut config);

    let routes = selected_routes(&args.routes);
    info!(
        out_dir = %config.out_dir.display(),
        routes = routes.len(),
        "exporting site"
    );

    let report = export_site(&config, &routes).context("exporting site")?;

    info!(
        pages = report.pages.len(),
        bytes = report.total_bytes(),
        out_dir = %report.out_dir.display(),
        "export complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
