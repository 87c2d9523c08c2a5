use chrono::Local;
use error_stack::ResultExt;
use thiserror::Error;
use tracing::info;

use crate::domain::cell_position::CellPosition;
use crate::domain::column::Column;
use crate::domain::row::HEADER_ROW;
use crate::domain::spreadsheet_ref::SpreadsheetRef;
use crate::ports::spreadsheet::Spreadsheet;

/// Date format used in the header row.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Error, Debug)]
pub enum DateColumnError {
    #[error("Failed to read the header row")]
    ReadHeader,
    #[error("Failed to write the date header")]
    WriteHeader,
}

pub fn today_header() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Column whose header cell holds `date`, or the first column past the
/// populated header cells when no match exists. Re-running on the same day
/// therefore lands in the same column.
pub fn resolve_date_column(header: &[String], date: &str) -> Column {
    for (index, cell) in header.iter().enumerate() {
        if cell.trim() == date {
            return Column::from(index);
        }
    }
    Column::from(header.len())
}

/// Reads the header row and resolves today's column. Returns the column
/// together with the date string that must be written into its header.
pub async fn locate_today_column(
    backend: &impl Spreadsheet,
    spreadsheet: &SpreadsheetRef,
    sheet: &str,
) -> error_stack::Result<(Column, String), DateColumnError> {
    let today = today_header();
    let header = backend
        .read_row(spreadsheet, sheet, HEADER_ROW)
        .await
        .change_context(DateColumnError::ReadHeader)?;

    let column = resolve_date_column(&header, &today);
    info!("Recording {today} in column {column}");
    Ok((column, today))
}

/// Writes the date into row 1 of the resolved column. Runs unconditionally:
/// when the column already carried today's date this overwrites it with the
/// identical value.
pub async fn write_date_header(
    backend: &impl Spreadsheet,
    spreadsheet: &SpreadsheetRef,
    sheet: &str,
    column: Column,
    date: &str,
) -> error_stack::Result<(), DateColumnError> {
    backend
        .write_cell(
            spreadsheet,
            sheet,
            CellPosition {
                col: column,
                row: HEADER_ROW,
            },
            date,
        )
        .await
        .change_context(DateColumnError::WriteHeader)
}
