// ==============================================================================
// annotation_csv.rs - Community Annotation Spreadsheet Parser
// ==============================================================================
// Description: Column-oriented extraction of the community supplement CSV
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-15
// Version: 1.0.0
// ==============================================================================
// Format: CSV file with header
// Example:
//   CneoH99 ID,CneoH99 Standard name,...,New description
//   CNAG_00001,ABC1 (Alias1),...,ABC transporter
// ==============================================================================

use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::models::{Organism, DESCRIPTION_COLUMN};

/// Errors that can occur while extracting spreadsheet columns
#[derive(Error, Debug)]
pub enum ColumnExtractError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Column '{0}' not found in header")]
    MissingColumn(String),

    #[error("Column '{0}' was not extracted")]
    UnknownColumn(String),

    #[error("Row {row} has no value for column '{column}'")]
    ShortRow { row: usize, column: String },
}

/// Selected spreadsheet columns, one value per data row
#[derive(Debug, Clone, Default)]
pub struct ColumnTable {
    columns: HashMap<String, Vec<String>>,
    rows: usize,
}

impl ColumnTable {
    /// Extract the wanted columns from a CSV file
    pub fn from_path(
        path: impl AsRef<Path>,
        wanted: &[String],
    ) -> Result<Self, ColumnExtractError> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path.as_ref())?;

        Self::from_csv(reader, wanted)
    }

    /// Extract the wanted columns from any CSV source
    pub fn from_reader<R: Read>(reader: R, wanted: &[String]) -> Result<Self, ColumnExtractError> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self::from_csv(reader, wanted)
    }

    fn from_csv<R: Read>(
        mut reader: csv::Reader<R>,
        wanted: &[String],
    ) -> Result<Self, ColumnExtractError> {
        let headers = reader.headers()?.clone();

        // Resolve every wanted name before reading data rows
        let indices = wanted
            .iter()
            .map(|name| {
                headers
                    .iter()
                    .position(|header| header == name)
                    .map(|idx| (name.as_str(), idx))
                    .ok_or_else(|| ColumnExtractError::MissingColumn(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut columns: HashMap<String, Vec<String>> = wanted
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();
        let mut rows = 0;

        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;

            for &(name, idx) in &indices {
                let value = record.get(idx).ok_or_else(|| ColumnExtractError::ShortRow {
                    // 1-based, counting the header line
                    row: row_idx + 2,
                    column: name.to_string(),
                })?;

                if let Some(column) = columns.get_mut(name) {
                    column.push(value.to_string());
                }
            }

            rows += 1;
        }

        Ok(Self { columns, rows })
    }

    /// Values of one extracted column, in row order
    pub fn column(&self, name: &str) -> Result<&[String], ColumnExtractError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ColumnExtractError::UnknownColumn(name.to_string()))
    }

    /// Number of data rows read (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

/// ID and standard-name columns of every organism, then the shared description
pub fn required_columns(organisms: &[Organism]) -> Vec<String> {
    organisms
        .iter()
        .flat_map(|org| [org.id_column(), org.name_column()])
        .chain(std::iter::once(DESCRIPTION_COLUMN.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn wanted(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_extract_selected_columns() {
        let contents = "\
Other,CneoH99 ID,New description,CneoH99 Standard name
x,CNAG_00001,kinase,ABC1 (Alias1)
y,CNAG_00002,,
";
        let table = ColumnTable::from_reader(
            contents.as_bytes(),
            &wanted(&["CneoH99 ID", "CneoH99 Standard name", "New description"]),
        )
        .unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("CneoH99 ID").unwrap(), ["CNAG_00001", "CNAG_00002"]);
        assert_eq!(table.column("CneoH99 Standard name").unwrap(), ["ABC1 (Alias1)", ""]);
        assert_eq!(table.column("New description").unwrap(), ["kinase", ""]);
    }

    #[test]
    fn test_missing_column() {
        let contents = "CneoH99 ID,New description\nCNAG_00001,kinase\n";

        let result = ColumnTable::from_reader(
            contents.as_bytes(),
            &wanted(&["CneoH99 ID", "CneoH99 Standard name"]),
        );

        match result.unwrap_err() {
            ColumnExtractError::MissingColumn(name) => {
                assert_eq!(name, "CneoH99 Standard name");
            }
            other => panic!("Expected MissingColumn error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_column_lookup() {
        let contents = "CneoH99 ID\nCNAG_00001\n";
        let table = ColumnTable::from_reader(contents.as_bytes(), &wanted(&["CneoH99 ID"])).unwrap();

        assert!(matches!(
            table.column("Other"),
            Err(ColumnExtractError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_ragged_rows_with_wanted_cells_accepted() {
        // Extra trailing cell, then a row missing only an unwanted column
        let contents = "A,B,C\n1,2,3\n4,5,6,\n7,8\n";

        let table = ColumnTable::from_reader(contents.as_bytes(), &wanted(&["A", "B"])).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column("A").unwrap(), ["1", "4", "7"]);
        assert_eq!(table.column("B").unwrap(), ["2", "5", "8"]);
    }

    #[test]
    fn test_short_row_missing_wanted_cell() {
        let contents = "A,B,C\n1,2,3\n4\n";

        match ColumnTable::from_reader(contents.as_bytes(), &wanted(&["A", "B"])).unwrap_err() {
            ColumnExtractError::ShortRow { row, column } => {
                assert_eq!(row, 3);
                assert_eq!(column, "B");
            }
            other => panic!("Expected ShortRow error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_keeps_quoted_commas() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "CneoH99 ID,New description\nCNAG_00001,\"kinase, putative\"\n").unwrap();
        file.flush().unwrap();

        let table = ColumnTable::from_path(
            file.path(),
            &wanted(&["CneoH99 ID", "New description"]),
        )
        .unwrap();

        assert_eq!(table.column("New description").unwrap(), ["kinase, putative"]);
    }

    #[test]
    fn test_required_columns_order() {
        let columns = required_columns(&[Organism::new("CneoH99"), Organism::new("CgatR265")]);
        assert_eq!(
            columns,
            vec![
                "CneoH99 ID",
                "CneoH99 Standard name",
                "CgatR265 ID",
                "CgatR265 Standard name",
                "New description",
            ]
        );
    }
}
