// ==============================================================================
// config.rs - Export Configuration
// ==============================================================================
// Description: Paths, organisms and release version for one export run
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-15
// Version: 1.0.0
// ==============================================================================

use std::path::{Path, PathBuf};

use crate::models::{Category, NegativeValues, Organism};

/// Root of the manual delivery tree
pub const DEFAULT_ROOT: &str = "/eupath/data/EuPathDB/manualDelivery/FungiDB";

/// Release directory written below every category directory
pub const DEFAULT_RELEASE: &str = "2014-04-30";

pub const DEFAULT_ORGANISMS: [&str; 5] = [
    "CneoH99",
    "CneoJEC21",
    "CneoB-3501A",
    "CgatR265",
    "CgatWM276",
];

/// Location of the community spreadsheet below the delivery root
const SOURCE_CSV: [&str; 4] = [
    "cryptococcus",
    "Community_annotations",
    "fromProvider",
    "Crypto_supplement.csv",
];

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Manual delivery root holding one directory per organism
    pub root: PathBuf,
    /// Community annotation spreadsheet
    pub source_csv: PathBuf,
    pub release: String,
    pub organisms: Vec<Organism>,
    pub negatives: NegativeValues,
    /// Fail instead of skipping the merge when an organism has no provider file
    pub require_provider: bool,
    /// Snapshot existing outputs to `.old` before writing
    pub backup: bool,
    /// Write a JSON run report here
    pub report_path: Option<PathBuf>,
}

impl ExportConfig {
    /// Configuration rooted at `root` with every other value at its default
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let source_csv = default_source_csv(&root);

        Self {
            root,
            source_csv,
            release: DEFAULT_RELEASE.to_string(),
            organisms: DEFAULT_ORGANISMS.iter().map(|o| Organism::new(*o)).collect(),
            negatives: NegativeValues::default(),
            require_provider: false,
            backup: false,
            report_path: None,
        }
    }

    pub fn organism_dir(&self, organism: &Organism) -> PathBuf {
        self.root.join(organism.as_str())
    }

    /// `<root>/<organism>/<category dir>/<release>/final`
    pub fn final_dir(&self, organism: &Organism, category: Category) -> PathBuf {
        self.organism_dir(organism)
            .join(category.directory())
            .join(&self.release)
            .join("final")
    }

    pub fn output_path(&self, organism: &Organism, category: Category) -> PathBuf {
        self.final_dir(organism, category).join(category.file_name())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }
}

pub fn default_source_csv(root: &Path) -> PathBuf {
    SOURCE_CSV.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ExportConfig::default();

        assert_eq!(
            config.source_csv,
            PathBuf::from(
                "/eupath/data/EuPathDB/manualDelivery/FungiDB/cryptococcus/Community_annotations/fromProvider/Crypto_supplement.csv"
            )
        );
        assert_eq!(config.organisms.len(), 5);
        assert!(!config.backup);
        assert!(!config.require_provider);
    }

    #[test]
    fn test_output_path_layout() {
        let config = ExportConfig::with_root("/md");
        let org = Organism::new("CneoH99");

        assert_eq!(
            config.output_path(&org, Category::GeneNames),
            PathBuf::from("/md/CneoH99/function/Community_gene_names/2014-04-30/final/geneName.txt")
        );
        assert_eq!(
            config.output_path(&org, Category::DbXrefs),
            PathBuf::from("/md/CneoH99/dbxref/Community_gene_names/2014-04-30/final/mapping.txt")
        );
    }
}
