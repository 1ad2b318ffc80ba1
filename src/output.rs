// ==============================================================================
// output.rs - Tab-Delimited Output Generation
// ==============================================================================
// Description: Serializes name entries and writes per-organism output files
// Author: Matt Barham
// Created: 2026-10-13
// Modified: 2026-10-15
// Version: 1.0.0
// ==============================================================================
// Format: one "<id>\t<value>" pair per line, no trailing newline
// ==============================================================================

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::models::NameEntry;

/// Join entries as `id\tvalue` lines separated by `\n`
pub fn export(entries: &[NameEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\t{}", entry.id, entry.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bytes written by [`write_output`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub lines: usize,
    pub bytes: usize,
    pub sha256: String,
}

/// Write exported entries to `path`, replacing any existing file
pub fn write_output(path: &Path, entries: &[NameEntry]) -> Result<WrittenFile> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let contents = export(entries);

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file {:?}", path))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write output file {:?}", path))?;
    file.sync_all()
        .context("Failed to sync output file to disk")?;

    debug!("Wrote {} bytes to {:?}", contents.len(), path);

    Ok(WrittenFile {
        lines: entries.len(),
        bytes: contents.len(),
        sha256: format!("{:x}", Sha256::digest(contents.as_bytes())),
    })
}
