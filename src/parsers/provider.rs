// ==============================================================================
// provider.rs - Provider Product Name File Parser
// ==============================================================================
// Description: Discovery and parsing of provider-supplied product name files
// Author: Matt Barham
// Created: 2026-10-13
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Format: Tab-delimited text, no header
// Example:
//   CNAG_00001    hypothetical protein
//   CNAG_00002    ABC transporter
//
// Location:
//   <organism>/function/<provider>_product_names/<version>/final/<name>.txt
//   (directories starting with "Community" are our own output)
// ==============================================================================

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

const FUNCTION_DIR: &str = "function";
const OWN_OUTPUT_PREFIX: &str = "Community";
const PROVIDER_SUFFIX: &str = "product_names";

/// Errors that can occur while parsing a provider file
#[derive(Error, Debug)]
pub enum ProviderParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid line format at line {line}: expected 2 tab-delimited fields, found {fields}")]
    MalformedLine { line: usize, fields: usize },
}

/// Errors that can occur while locating a provider file
#[derive(Error, Debug)]
pub enum ProviderLookupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory traversal error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("No provider product name file found under {0}")]
    NotFound(PathBuf),

    #[error("Multiple provider product name files found: {matches:?}")]
    Ambiguous { matches: Vec<PathBuf> },
}

/// Parse a provider file into an ID -> description map
pub fn parse_provider_file(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, String>, ProviderParseError> {
    let file = File::open(path.as_ref())?;
    parse_provider_lines(file)
}

/// Parse provider lines; a repeated ID keeps its last description
pub fn parse_provider_lines<R: Read>(
    reader: R,
) -> Result<BTreeMap<String, String>, ProviderParseError> {
    let reader = BufReader::new(reader);
    let mut products = BTreeMap::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let fields: Vec<&str> = line.trim_end().split('\t').collect();

        match fields.as_slice() {
            [id, description] => {
                products.insert(id.to_string(), description.to_string());
            }
            _ => {
                return Err(ProviderParseError::MalformedLine {
                    line: idx + 1,
                    fields: fields.len(),
                })
            }
        }
    }

    Ok(products)
}

/// Locate the provider product name file of one organism
///
/// Returns `Ok(None)` when the organism has no provider file at all and
/// fails when more than one candidate exists.
pub fn find_provider_file(organism_dir: &Path) -> Result<Option<PathBuf>, ProviderLookupError> {
    let function_dir = organism_dir.join(FUNCTION_DIR);
    if !function_dir.is_dir() {
        debug!("No function directory at {:?}", function_dir);
        return Ok(None);
    }

    let mut matches = Vec::new();

    for entry in std::fs::read_dir(&function_dir)? {
        let entry = entry?;
        let path = entry.path();
        let dir_name = entry.file_name().to_string_lossy().to_string();

        if !path.is_dir()
            || dir_name.starts_with(OWN_OUTPUT_PREFIX)
            || !dir_name.ends_with(PROVIDER_SUFFIX)
        {
            continue;
        }

        debug!("Scanning provider directory {:?}", path);
        matches.extend(final_text_files(&path)?);
    }

    matches.sort();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(ProviderLookupError::Ambiguous { matches }),
    }
}

/// Files matching `<dir>/*/final/*.txt`, hidden names excluded.
/// Symlinked version directories and files are resolved.
fn final_text_files(dir: &Path) -> Result<Vec<PathBuf>, ProviderLookupError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(3)
        .max_depth(3)
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        let path = entry.path();

        let in_final = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|name| name == "final")
            .unwrap_or(false);
        let is_txt = path.extension().map(|ext| ext == "txt").unwrap_or(false);

        if entry.file_type().is_file() && in_final && is_txt {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_provider(root: &Path, provider: &str, version: &str, name: &str) -> PathBuf {
        let dir = root
            .join("function")
            .join(provider)
            .join(version)
            .join("final");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, "CNAG_00001\tkinase\n").unwrap();
        path
    }

    #[test]
    fn test_parse_provider_lines() {
        let contents = "CNAG_00002\tABC transporter\nCNAG_00001\thypothetical protein  \n";

        let products = parse_provider_lines(contents.as_bytes()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products["CNAG_00001"], "hypothetical protein");
        assert_eq!(products["CNAG_00002"], "ABC transporter");
    }

    #[test]
    fn test_parse_malformed_line() {
        let contents = "CNAG_00001\tkinase\nCNAG_00002\tone\ttoo many\n";

        match parse_provider_lines(contents.as_bytes()).unwrap_err() {
            ProviderParseError::MalformedLine { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 3);
            }
            other => panic!("Expected MalformedLine error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_tab() {
        let contents = "CNAG_00001 kinase\n";

        assert!(matches!(
            parse_provider_lines(contents.as_bytes()),
            Err(ProviderParseError::MalformedLine { line: 1, fields: 1 })
        ));
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            parse_provider_file(dir.path().join("absent.txt")),
            Err(ProviderParseError::IoError(_))
        ));
    }

    #[test]
    fn test_find_single_provider_file() {
        let dir = tempdir().unwrap();
        let expected = write_provider(dir.path(), "Broad_product_names", "2013-01-01", "products.txt");
        // Our own output and unrelated directories are ignored
        write_provider(dir.path(), "Community_product_names", "2014-04-30", "products.txt");
        write_provider(dir.path(), "Broad_gene_names", "2013-01-01", "genes.txt");

        let found = find_provider_file(dir.path()).unwrap();

        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_find_ignores_non_final_and_non_txt() {
        let dir = tempdir().unwrap();
        let provider = dir.path().join("function/Broad_product_names/2013-01-01");
        fs::create_dir_all(provider.join("workspace")).unwrap();
        fs::create_dir_all(provider.join("final")).unwrap();
        fs::write(provider.join("workspace/products.txt"), "").unwrap();
        fs::write(provider.join("final/products.tsv"), "").unwrap();
        fs::write(provider.join("final/.hidden.txt"), "").unwrap();

        assert_eq!(find_provider_file(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_find_without_function_dir() {
        let dir = tempdir().unwrap();
        assert_eq!(find_provider_file(dir.path()).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_symlinked_provider_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("shared_products.txt");
        fs::write(&target, "CNAG_00001\tkinase\n").unwrap();

        let final_dir = dir.path().join("function/Broad_product_names/2013-01-01/final");
        fs::create_dir_all(&final_dir).unwrap();
        let link = final_dir.join("products.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(find_provider_file(dir.path()).unwrap(), Some(link));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_through_symlinked_version_dir() {
        let dir = tempdir().unwrap();
        let real = write_provider(dir.path(), "Broad_product_names", "2013-01-01", "products.txt");
        // Move the real release out of the provider directory and link it back
        let release = dir.path().join("releases/2013-01-01");
        fs::create_dir_all(release.parent().unwrap()).unwrap();
        fs::rename(real.parent().unwrap().parent().unwrap(), &release).unwrap();
        let provider = dir.path().join("function/Broad_product_names");
        std::os::unix::fs::symlink(&release, provider.join("current")).unwrap();

        let found = find_provider_file(dir.path()).unwrap();

        assert_eq!(found, Some(provider.join("current/final/products.txt")));
        let products = parse_provider_file(found.unwrap()).unwrap();
        assert_eq!(products["CNAG_00001"], "kinase");
    }

    #[test]
    fn test_find_ambiguous_provider_files() {
        let dir = tempdir().unwrap();
        write_provider(dir.path(), "Broad_product_names", "2013-01-01", "products.txt");
        write_provider(dir.path(), "JGI_product_names", "2012-06-01", "products.txt");

        match find_provider_file(dir.path()).unwrap_err() {
            ProviderLookupError::Ambiguous { matches } => assert_eq!(matches.len(), 2),
            other => panic!("Expected Ambiguous error, got {other:?}"),
        }
    }
}
