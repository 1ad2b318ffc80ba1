// ==============================================================================
// names.rs - Name Cell Splitting and Category Filters
// ==============================================================================
// Description: Splits standard-name cells and filters ID/value columns into
//              sorted name entries per output category
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-15
// Version: 1.0.0
// ==============================================================================
// Name cell convention:
//   "ABC1 DEF2 (Alias1) (Alias2)"
//   bare tokens        -> primary names  ["ABC1", "DEF2"]
//   parenthesized ones -> aliases        ["Alias1", "Alias2"]
// ==============================================================================

use tracing::debug;

use crate::models::{AliasGroup, NameEntry, NegativeValues, SplitName};

/// Split a standard-name cell into primary names and aliases
///
/// A token beginning with `(` loses one leading `(` and, if present, one
/// trailing `)`. Unbalanced tokens such as `(abc` are kept as alias `abc`.
/// A token that strips to nothing (`()`) is dropped.
pub fn split_names(cell: &str) -> SplitName {
    let mut split = SplitName::default();

    for token in cell.split_whitespace() {
        match token.strip_prefix('(') {
            Some(inner) => {
                let alias = match inner.strip_suffix(')') {
                    Some(alias) => alias,
                    None => {
                        debug!("Unbalanced alias token '{}' in '{}'", token, cell);
                        inner
                    }
                };
                if !alias.is_empty() {
                    split.aliases.push(alias.to_string());
                }
            }
            None => split.primary.push(token.to_string()),
        }
    }

    split
}

/// Product descriptions: keep non-empty descriptions for non-negative IDs
pub fn filter_product_names(
    ids: &[String],
    descriptions: &[String],
    negatives: &NegativeValues,
) -> Vec<NameEntry> {
    let mut entries: Vec<NameEntry> = ids
        .iter()
        .zip(descriptions)
        .filter(|(id, description)| !description.is_empty() && !negatives.contains(id))
        .map(|(id, description)| NameEntry::new(id.as_str(), description.as_str()))
        .collect();

    entries.sort();
    entries
}

/// Gene names: first primary token only, aliases and extra tokens dropped
pub fn filter_gene_names(
    ids: &[String],
    names: &[String],
    negatives: &NegativeValues,
) -> Vec<NameEntry> {
    let mut entries: Vec<NameEntry> = ids
        .iter()
        .zip(names)
        .filter(|(id, _)| !negatives.contains(id))
        .filter_map(|(id, cell)| {
            split_names(cell)
                .primary
                .into_iter()
                .next()
                .map(|name| NameEntry::new(id.as_str(), name))
        })
        .collect();

    entries.sort();
    entries
}

/// Aliases: every primary name followed by every alias, grouped per ID
pub fn filter_aliases(
    ids: &[String],
    names: &[String],
    negatives: &NegativeValues,
) -> Vec<AliasGroup> {
    let mut groups: Vec<AliasGroup> = ids
        .iter()
        .zip(names)
        .filter(|(id, _)| !negatives.contains(id))
        .filter_map(|(id, cell)| {
            let SplitName { mut primary, aliases } = split_names(cell);
            primary.extend(aliases);
            (!primary.is_empty()).then(|| AliasGroup {
                id: id.clone(),
                names: primary,
            })
        })
        .collect();

    groups.sort();
    groups
}

/// One entry per (ID, name), sorted by (ID, name)
pub fn flatten_aliases(groups: Vec<AliasGroup>) -> Vec<NameEntry> {
    let mut entries: Vec<NameEntry> = groups
        .into_iter()
        .flat_map(|group| {
            let id = group.id;
            group
                .names
                .into_iter()
                .map(move |name| NameEntry::new(id.clone(), name))
        })
        .collect();

    entries.sort();
    entries
}
