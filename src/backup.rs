// ==============================================================================
// backup.rs - Output Snapshot Before Overwrite
// ==============================================================================
// Description: Renames existing output files to `.old` before a run and
//              either discards or restores them afterwards
// Author: Matt Barham
// Created: 2026-10-14
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Lifecycle:
//   1. snapshot()  every <final>/*.txt  ->  <final>/*.txt.old
//   2. commit()    removes the .old files (run succeeded)
//   3. drop        without commit, moves every .old file back
// ==============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ExportConfig;
use crate::models::Category;

#[derive(Debug)]
struct Snapshot {
    original: PathBuf,
    old: PathBuf,
}

/// Outputs moved aside for the duration of one run
#[derive(Debug)]
pub struct OutputBackup {
    snapshots: Vec<Snapshot>,
    committed: bool,
}

impl OutputBackup {
    /// Rename every existing output of every organism/category to `.old`
    pub fn snapshot(config: &ExportConfig) -> Result<Self> {
        let mut backup = Self {
            snapshots: Vec::new(),
            committed: false,
        };

        for category in Category::ALL {
            for organism in &config.organisms {
                let final_dir = config.final_dir(organism, category);
                if !final_dir.is_dir() {
                    continue;
                }

                for original in text_files(&final_dir)? {
                    let old = old_path(&original);
                    std::fs::rename(&original, &old)
                        .with_context(|| format!("Failed to rename {:?} to {:?}", original, old))?;
                    debug!("Snapshot {:?} -> {:?}", original, old);
                    backup.snapshots.push(Snapshot { original, old });
                }
            }
        }

        debug!("Snapshot {} existing output files", backup.snapshots.len());
        Ok(backup)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Discard the snapshots once the new outputs are in place
    pub fn commit(mut self) -> Result<()> {
        // Nothing may be restored from here on, even if a removal fails
        self.committed = true;

        for snapshot in &self.snapshots {
            std::fs::remove_file(&snapshot.old)
                .with_context(|| format!("Failed to remove snapshot {:?}", snapshot.old))?;
        }

        info!("Discarded {} output snapshots", self.snapshots.len());
        Ok(())
    }

    fn restore(&self) {
        for snapshot in &self.snapshots {
            match std::fs::rename(&snapshot.old, &snapshot.original) {
                Ok(()) => debug!("Restored {:?}", snapshot.original),
                Err(e) => warn!("Failed to restore {:?}: {}", snapshot.original, e),
            }
        }
    }
}

impl Drop for OutputBackup {
    fn drop(&mut self) {
        if !self.committed && !self.snapshots.is_empty() {
            warn!("Run did not complete, restoring {} output files", self.snapshots.len());
            self.restore();
        }
    }
}

/// `*.txt` directly inside `dir`, hidden names excluded
fn text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let is_txt = path.extension().map(|ext| ext == "txt").unwrap_or(false);

        if entry.file_type().is_file() && is_txt && !hidden {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn old_path(path: &Path) -> PathBuf {
    let mut old = path.as_os_str().to_owned();
    old.push(".old");
    PathBuf::from(old)
}
