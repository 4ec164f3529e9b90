//! Spreadsheet ingestion.
//!
//! Reads the configured worksheet into an [`EmissionsTable`]: headers
//! are normalized to canonical lower_snake names, the emissions column
//! is coerced to numeric (unparseable cells become missing), and values
//! are converted from kilotonnes to megatonnes.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, XlsxError, open_workbook};

use crate::error::{EmissionsError, Result};
use crate::table::{EmissionsRecord, EmissionsTable, columns};

/// Kilotonnes per megatonne.
const KT_PER_MT: f64 = 1000.0;

/// Read the named worksheet of an xlsx workbook into a table.
///
/// # Errors
/// Fails when the workbook cannot be opened, the sheet is absent, or an
/// expected column is missing after header normalization.
pub fn read_workbook(path: &Path, sheet: &str, emissions_column: &str) -> Result<EmissionsTable> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| EmissionsError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| match source {
            XlsxError::WorksheetNotFound(_) => EmissionsError::SheetNotFound {
                sheet: sheet.to_string(),
                path: path.to_path_buf(),
            },
            other => EmissionsError::Workbook {
                path: path.to_path_buf(),
                source: other,
            },
        })?;

    parse_rows(range.rows(), emissions_column)
}

/// Column indices resolved from the normalized header row.
struct ColumnIndex {
    country_code: usize,
    country_name: usize,
    gas_scope: usize,
    crf_code: usize,
    sector_code: usize,
    sector_name: usize,
    emissions: usize,
}

impl ColumnIndex {
    fn resolve(header: &[Data], emissions_column: &str) -> Result<Self> {
        let names: Vec<String> = header
            .iter()
            .map(|cell| columns::canonical(&cell_text(cell)))
            .collect();

        let find = |name: &str| -> Result<usize> {
            names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| EmissionsError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            country_code: find(columns::COUNTRY_CODE)?,
            country_name: find(columns::COUNTRY_NAME)?,
            gas_scope: find(columns::GAS_SCOPE)?,
            crf_code: find(columns::CRF_CODE)?,
            sector_code: find(columns::SECTOR_CODE)?,
            sector_name: find(columns::SECTOR_NAME)?,
            emissions: find(&columns::canonical(emissions_column))?,
        })
    }
}

fn parse_rows<'a, I>(mut rows: I, emissions_column: &str) -> Result<EmissionsTable>
where
    I: Iterator<Item = &'a [Data]>,
{
    let Some(header) = rows.next() else {
        return Ok(EmissionsTable::default());
    };
    let index = ColumnIndex::resolve(header, emissions_column)?;

    let records = rows
        .filter(|row| !row.iter().all(|cell| matches!(cell, Data::Empty)))
        .map(|row| EmissionsRecord {
            country_code: cell_text(cell_at(row, index.country_code)),
            country_name: cell_text(cell_at(row, index.country_name)),
            gas_scope: cell_text(cell_at(row, index.gas_scope)),
            crf_code: cell_text(cell_at(row, index.crf_code)),
            sector_code: cell_text(cell_at(row, index.sector_code)),
            sector_name: cell_text(cell_at(row, index.sector_name)),
            emissions: cell_number(cell_at(row, index.emissions)).map(|kt| kt / KT_PER_MT),
            emissions_per_capita: None,
        })
        .collect();

    Ok(EmissionsTable::new(records))
}

fn cell_at(row: &[Data], index: usize) -> &Data {
    row.get(index).unwrap_or(&Data::Empty)
}

/// Text content of a cell. Numeric category codes ("1", "1.A") keep an
/// integral rendering rather than "1.0".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => {
            #[allow(clippy::cast_possible_truncation)]
            let i = *f as i64;
            i.to_string()
        }
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Numeric coercion: unparseable content is missing, never an error.
#[allow(clippy::cast_precision_loss)] // Source values are far below 2^52
fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "workbook_tests.rs"]
mod tests;
