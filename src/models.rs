// ==============================================================================
// models.rs - Annotation Export Data Models
// ==============================================================================
// Description: Organisms, output categories and name entries
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-14
// Version: 1.0.0
// ==============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Shared description column used for product names
pub const DESCRIPTION_COLUMN: &str = "New description";

/// Fungal strain identifier (e.g., "CneoH99")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Organism(String);

impl Organism {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Column holding this organism's gene identifiers
    pub fn id_column(&self) -> String {
        format!("{} ID", self.0)
    }

    /// Column holding this organism's standard gene names
    pub fn name_column(&self) -> String {
        format!("{} Standard name", self.0)
    }
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of annotation written per organism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Product descriptions, merged with the provider's own file
    ProductNames,
    /// Canonical gene name (first primary token only)
    GeneNames,
    /// Every primary name and alias
    Aliases,
    /// Cross-reference mapping (same content as aliases)
    DbXrefs,
}

impl Category {
    /// Processing order
    pub const ALL: [Category; 4] = [
        Category::ProductNames,
        Category::GeneNames,
        Category::Aliases,
        Category::DbXrefs,
    ];

    /// Directory below the organism directory
    pub fn directory(&self) -> &'static str {
        match self {
            Category::ProductNames => "function/Community_product_names",
            Category::GeneNames => "function/Community_gene_names",
            Category::Aliases => "alias/Community_gene_names",
            Category::DbXrefs => "dbxref/Community_gene_names",
        }
    }

    /// Output file name inside `<version>/final`
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::ProductNames => "products.txt",
            Category::GeneNames => "geneName.txt",
            Category::Aliases => "aliases.txt",
            Category::DbXrefs => "mapping.txt",
        }
    }

    /// Source column providing the values for this category
    pub fn value_column(&self, organism: &Organism) -> String {
        match self {
            Category::ProductNames => DESCRIPTION_COLUMN.to_string(),
            _ => organism.name_column(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ProductNames => "product_names",
            Category::GeneNames => "gene_names",
            Category::Aliases => "aliases",
            Category::DbXrefs => "dbxrefs",
        }
    }
}

/// Gene identifier paired with one output value.
///
/// Field order matters: the derived `Ord` sorts by id, then value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameEntry {
    pub id: String,
    pub value: String,
}

impl NameEntry {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// One name cell split into bare tokens and parenthesized aliases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitName {
    pub primary: Vec<String>,
    pub aliases: Vec<String>,
}

/// Gene identifier with every name it carries (primaries then aliases)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AliasGroup {
    pub id: String,
    pub names: Vec<String>,
}

/// Placeholder values meaning "no data"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeValues {
    values: HashSet<String>,
}

impl NegativeValues {
    /// Build from arbitrary sentinels; stored uppercased
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            values: values
                .into_iter()
                .map(|v| v.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Case-insensitive membership. No trimming is applied.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value.to_uppercase())
    }
}

impl Default for NegativeValues {
    fn default() -> Self {
        Self::new([
            "",
            "NONE",
            "NOT CALLED",
            "NONE CALLED",
            "NONE?",
            "SPLIT ORF",
            "UNSURE",
        ])
    }
}
