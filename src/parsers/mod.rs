// ==============================================================================
// parsers/mod.rs - File parser modules
// ==============================================================================
// Description: Parsers for the community spreadsheet and provider files
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-13
// Version: 1.0.0
// ==============================================================================

pub mod annotation_csv;
pub mod provider;

pub use annotation_csv::{required_columns, ColumnExtractError, ColumnTable};
pub use provider::{
    find_provider_file, parse_provider_file, parse_provider_lines, ProviderLookupError,
    ProviderParseError,
};
