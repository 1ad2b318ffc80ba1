// ==============================================================================
// main.rs - Community Annotation Export Entry Point
// ==============================================================================
// Description: Exports community gene annotations into the manual delivery tree
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use community_annotations::config::{
    default_source_csv, ExportConfig, DEFAULT_ORGANISMS, DEFAULT_RELEASE, DEFAULT_ROOT,
};
use community_annotations::models::Organism;
use community_annotations::processor::AnnotationExporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Manual delivery root (one directory per organism)
    #[arg(long, env = "MANUAL_DELIVERY_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Community annotation spreadsheet (defaults to the supplement under the root)
    #[arg(long)]
    source_csv: Option<PathBuf>,

    /// Release directory name for the written files
    #[arg(long, default_value = DEFAULT_RELEASE)]
    release: String,

    /// Organism to export (repeatable)
    #[arg(long = "organism", default_values = DEFAULT_ORGANISMS)]
    organisms: Vec<String>,

    /// Rename existing outputs to .old first, restoring them if the run fails
    #[arg(long)]
    backup: bool,

    /// Fail when an organism has no provider product name file
    #[arg(long)]
    require_provider: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> ExportConfig {
        let mut config = ExportConfig::with_root(&self.root);
        config.source_csv = self
            .source_csv
            .unwrap_or_else(|| default_source_csv(&self.root));
        config.release = self.release;
        config.organisms = self.organisms.into_iter().map(Organism::new).collect();
        config.backup = self.backup;
        config.require_provider = self.require_provider;
        config.report_path = self.report;
        config
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "community_annotations=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Community annotation export starting...");

    let args = Args::parse();
    let config = args.into_config();

    if config.organisms.is_empty() {
        anyhow::bail!("At least one organism must be given");
    }

    let exporter = AnnotationExporter::new(config);

    match exporter.run() {
        Ok(summary) => {
            info!(
                "Export completed successfully: {} files written",
                summary.outputs.len()
            );
            Ok(())
        }
        Err(e) => {
            warn!("Export failed: {:#}", e);
            Err(e)
        }
    }
}
