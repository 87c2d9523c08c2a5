use thiserror::Error;

use crate::domain::cell_position::CellPosition;
use crate::domain::column::Column;
use crate::domain::row::Row;
use crate::domain::spreadsheet_ref::SpreadsheetRef;

/// One variant per backend operation, so a failure always names the call
/// that produced it.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("Failed to fetch spreadsheet title")]
    FetchTitle,
    #[error("Failed to list sheet tabs")]
    ListSheets,
    #[error("Failed to read range")]
    ReadRange,
    #[error("Failed to write range")]
    WriteRange,
}

/// The remote spreadsheet service, as seen by the application layer.
#[async_trait::async_trait]
pub trait Spreadsheet: Send + Sync {
    /// Human-readable document title, shown when offering to reuse a saved
    /// reference.
    async fn title(
        &self,
        spreadsheet: &SpreadsheetRef,
    ) -> error_stack::Result<String, SpreadsheetError>;

    /// Titles of all sheet tabs in the document, in tab order.
    async fn sheet_names(
        &self,
        spreadsheet: &SpreadsheetRef,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError>;

    /// All populated cells of `row`, left to right.
    async fn read_row(
        &self,
        spreadsheet: &SpreadsheetRef,
        sheet: &str,
        row: Row,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError>;

    /// Populated cells of `column` from `from_row` downward.
    async fn read_column(
        &self,
        spreadsheet: &SpreadsheetRef,
        sheet: &str,
        column: Column,
        from_row: Row,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError>;

    async fn write_cell(
        &self,
        spreadsheet: &SpreadsheetRef,
        sheet: &str,
        position: CellPosition,
        value: &str,
    ) -> error_stack::Result<(), SpreadsheetError>;
}
