// ==============================================================================
// report.rs - Export Run Report
// ==============================================================================
// Description: Record of every file written and merged during one run
// Author: Matt Barham
// Created: 2026-10-14
// Modified: 2026-10-15
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Category, Organism};

/// One output file written by the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    pub organism: Organism,
    pub category: Category,
    pub path: PathBuf,
    pub lines: usize,
    pub sha256: String,
}

/// Provider file merged into an organism's product names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedProvider {
    pub organism: Organism,
    pub path: PathBuf,
    pub provider_entries: usize,
    pub merged_entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub source_csv: PathBuf,
    pub source_rows: usize,
    pub release: String,
    pub outputs: Vec<OutputRecord>,
    pub merged_providers: Vec<MergedProvider>,
}

impl RunSummary {
    pub fn start(source_csv: &Path, release: &str) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            source_csv: source_csv.to_path_buf(),
            source_rows: 0,
            release: release.to_string(),
            outputs: Vec::new(),
            merged_providers: Vec::new(),
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn total_lines(&self) -> usize {
        self.outputs.iter().map(|o| o.lines).sum()
    }

    pub fn log(&self) {
        info!(
            "Export summary: {} rows read, {} files written, {} lines, {} provider files merged",
            self.source_rows,
            self.outputs.len(),
            self.total_lines(),
            self.merged_providers.len()
        );
    }

    /// Write the summary as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize run report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write run report {:?}", path))?;

        info!("Run report written to {:?}", path);
        Ok(())
    }
}
