//! SolarEdge CSV Exporter
//!
//! Downloads the complete quarter-hour energy history of one SolarEdge site
//! (consumption, export, import, self-consumption and production) and writes
//! it as a single time-ordered CSV table.
//!
//! # Architecture
//!
//! A single sequential pass:
//! - **dataPeriod**: ask the monitoring API which days the site has data for
//! - **Walk**: split that history into windows of at most 4 weeks
//! - **Fetch / reconcile / emit**: per window, request the five meters,
//!   map them onto fixed columns and append the rows to the sink
//!
//! Any failure ends the run with a non-zero exit status.

mod cli;
mod config;
mod error;
mod export;
mod model;
mod solaredge;


use crate::cli::{Cli, ExportConfig};
use crate::config::SolarEdgeConfig;
use crate::export::{ExportSummary, Exporter};
use clap::Parser;
use std::sync::Arc;

/// Application entry point.
///
/// Validates the invocation, then runs the export. Logs go to stderr so
/// standard output carries only CSV.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load_app_config()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(app_config.log_level())
        .init();

    let export_config = Cli::parse()
        .into_export_config()
        .unwrap_or_else(|err| Cli::usage_error(&err).exit());
    let solaredge_config = config::load_solaredge_config()?;

    let summary = run(export_config, solaredge_config).await?;
    tracing::info!(
        "Wrote {} rows covering {}..{} (end exclusive)",
        summary.rows,
        summary.range.start,
        summary.range.end
    );
    Ok(())
}

/// Exports one site's history to the configured sink.
///
/// The sink is opened before the first request, so an unwritable output
/// path fails without touching the network.
async fn run(
    export_config: ExportConfig,
    solaredge_config: SolarEdgeConfig,
) -> error::Result<ExportSummary> {
    let sink = export::open_sink(export_config.out.as_deref())?;
    let client = solaredge::Client::new(solaredge_config, export_config.api_key)?;
    let site = Arc::new(solaredge::Site::new(client, export_config.site_id));
    tracing::info!("Exporting site {}", export_config.site_id);

    Exporter::new(site).run(sink).await
}
