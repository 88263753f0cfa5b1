//! Tempo application shell (v1)
//!
//! Bootstraps the client application into an in-process host document.
//!
//! # Architecture Overview
//!
//! ```text
//!   config (TOML / defaults)
//!        │
//!        ▼
//!   ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌────────────────┐
//!   │ config   │───▶│ routing  │───▶│ shell::app   │───▶│ shell::document│
//!   │ validate │    │ table +  │    │ initialize → │    │  #app element  │
//!   └──────────┘    │ router   │    │ use_router → │    └────────────────┘
//!                   └──────────┘    │ mount        │            ▲
//!                        ▲          └──────┬───────┘            │
//!                        │                 │ navigate           │ render
//!                        └─────────────────┴────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use tempo_shell::config::{load_config, ShellConfig};
use tempo_shell::lifecycle::bootstrap;
use tempo_shell::observability::logging;
use tempo_shell::Document;

#[derive(Parser)]
#[command(name = "tempo-shell")]
#[command(about = "Mount the Tempo client application and replay navigation", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the host element id.
    #[arg(long)]
    host: Option<String>,

    /// Paths to navigate to after mounting, in order.
    #[arg(short, long = "navigate", value_name = "PATH")]
    navigate: Vec<String>,

    /// Print a JSON snapshot instead of document markup.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_config(path),
        None => Ok(ShellConfig::default()),
    };
    let filter = loaded
        .as_ref()
        .map(|c| c.observability.log_filter.as_str())
        .unwrap_or(logging::DEFAULT_FILTER);
    logging::init(filter);

    tracing::info!("tempo-shell v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;
    if let Some(host) = cli.host {
        config.shell.host_element = host;
    }

    tracing::info!(
        host_element = %config.shell.host_element,
        routes = config.routes.len(),
        initial_path = %config.history.initial_path,
        "Configuration loaded"
    );

    let mut document = Document::with_host(config.shell.host_element.clone());
    let mut app = bootstrap(&config, &mut document).inspect_err(|e| {
        tracing::error!(error = %e, "Startup failed");
    })?;

    for path in &cli.navigate {
        if let Err(e) = app.navigate(path) {
            tracing::warn!(path = %path, error = %e, "Skipping navigation");
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&app.snapshot())?);
    } else {
        println!("{}", app.document().render());
    }

    Ok(())
}
