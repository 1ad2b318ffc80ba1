// ==============================================================================
// processor.rs - Community Annotation Export Pipeline
// ==============================================================================
// Description: Splits the community supplement into per-organism product
//              name, gene name, alias and cross-reference files
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::backup::OutputBackup;
use crate::config::ExportConfig;
use crate::models::{Category, NameEntry, Organism};
use crate::names::{filter_aliases, filter_gene_names, filter_product_names, flatten_aliases};
use crate::output::write_output;
use crate::parsers::{
    find_provider_file, parse_provider_file, required_columns, ColumnTable, ProviderLookupError,
};
use crate::report::{MergedProvider, OutputRecord, RunSummary};

pub struct AnnotationExporter {
    config: ExportConfig,
}

impl AnnotationExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Main export pipeline
    pub fn run(&self) -> Result<RunSummary> {
        info!("Starting community annotation export, release {}", self.config.release);
        let mut summary = RunSummary::start(&self.config.source_csv, &self.config.release);

        // 1. Move existing outputs aside if requested
        let backup = if self.config.backup {
            let backup = OutputBackup::snapshot(&self.config)
                .context("Failed to snapshot existing outputs")?;
            if backup.is_empty() {
                debug!("No existing outputs to move aside");
            } else {
                info!("Moved {} existing outputs aside", backup.len());
            }
            Some(backup)
        } else {
            None
        };

        // 2. Load spreadsheet columns
        info!("Reading community annotations from {:?}", self.config.source_csv);
        let columns = required_columns(&self.config.organisms);
        let table = ColumnTable::from_path(&self.config.source_csv, &columns)
            .with_context(|| format!("Failed to read {:?}", self.config.source_csv))?;
        summary.source_rows = table.row_count();
        info!("Read {} annotation rows", table.row_count());

        // 3. One file per category and organism
        for category in Category::ALL {
            for organism in &self.config.organisms {
                let record = self
                    .export_category(&table, organism, category, &mut summary)
                    .with_context(|| format!("Failed to export {} for {}", category.as_str(), organism))?;
                summary.outputs.push(record);
            }
        }

        // 4. Keep the new outputs
        if let Some(backup) = backup {
            backup.commit()?;
        }

        summary.finish();
        summary.log();

        if let Some(report_path) = &self.config.report_path {
            summary.write_json(report_path)?;
        }

        Ok(summary)
    }

    fn export_category(
        &self,
        table: &ColumnTable,
        organism: &Organism,
        category: Category,
        summary: &mut RunSummary,
    ) -> Result<OutputRecord> {
        let ids = table.column(&organism.id_column())?;
        let values = table.column(&category.value_column(organism))?;
        let negatives = &self.config.negatives;

        let entries = match category {
            Category::ProductNames => {
                let fresh = filter_product_names(ids, values, negatives);
                self.merge_with_provider(organism, fresh, summary)?
            }
            Category::GeneNames => filter_gene_names(ids, values, negatives),
            Category::Aliases | Category::DbXrefs => {
                flatten_aliases(filter_aliases(ids, values, negatives))
            }
        };

        let path = self.config.output_path(organism, category);
        let written = write_output(&path, &entries)?;
        info!(
            "Wrote {} {} entries for {} to {:?}",
            written.lines,
            category.as_str(),
            organism,
            path
        );

        Ok(OutputRecord {
            organism: organism.clone(),
            category,
            path,
            lines: written.lines,
            sha256: written.sha256,
        })
    }

    /// Overlay fresh product names on the organism's provider file, if any
    fn merge_with_provider(
        &self,
        organism: &Organism,
        fresh: Vec<NameEntry>,
        summary: &mut RunSummary,
    ) -> Result<Vec<NameEntry>> {
        let organism_dir = self.config.organism_dir(organism);

        let provider_path = match find_provider_file(&organism_dir)? {
            Some(path) => path,
            None if self.config.require_provider => {
                return Err(ProviderLookupError::NotFound(organism_dir).into());
            }
            None => {
                warn!("No provider product names for {}, skipping merge", organism);
                return Ok(fresh);
            }
        };

        debug!("Merging {} product names into {:?}", fresh.len(), provider_path);
        let provider = parse_provider_file(&provider_path)
            .with_context(|| format!("Failed to parse provider file {:?}", provider_path))?;
        let provider_entries = provider.len();

        let merged = merge_product_names(provider, fresh);

        info!(
            "Merged {} provider product names for {} ({} after merge)",
            provider_entries,
            organism,
            merged.len()
        );
        summary.merged_providers.push(MergedProvider {
            organism: organism.clone(),
            path: provider_path,
            provider_entries,
            merged_entries: merged.len(),
        });

        Ok(merged)
    }
}

/// Fresh descriptions replace provider ones; provider-only IDs are kept.
///
/// With duplicate IDs in `fresh`, the last one in sorted order wins.
pub fn merge_product_names(
    mut provider: BTreeMap<String, String>,
    fresh: Vec<NameEntry>,
) -> Vec<NameEntry> {
    for entry in fresh {
        provider.insert(entry.id, entry.value);
    }

    provider
        .into_iter()
        .map(|(id, value)| NameEntry { id, value })
        .collect()
}
