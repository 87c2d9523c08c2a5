use std::future::Future;

use error_stack::ResultExt;
use thiserror::Error;
use tokio::io::{AsyncBufRead, Lines};
use tracing::{debug, info};

use crate::domain::attendance_id::AttendanceId;
use crate::domain::cell_position::CellPosition;
use crate::domain::column::Column;
use crate::domain::row::{Row, FIRST_ENTRY_ROW};
use crate::domain::spreadsheet_ref::SpreadsheetRef;
use crate::ports::spreadsheet::Spreadsheet;

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("Failed to find the next empty row")]
    NextRow,
    #[error("Failed to write an attendance ID")]
    Write,
    #[error("Failed to read from the input stream")]
    Input,
}

/// What happened to one typed line. Blank lines produce no outcome at all.
pub enum LineOutcome<'a> {
    Accepted { id: &'a AttendanceId, row: Row },
    Rejected { input: &'a str },
}

/// Per-line feedback sink. The terminal renders these inline; tests record
/// them.
pub trait EntryReporter {
    fn report(&mut self, outcome: LineOutcome<'_>);
}

/// First row of the column with no entry yet: entries are contiguous from
/// row 2, so it is the populated count plus two.
pub async fn next_empty_row(
    backend: &impl Spreadsheet,
    spreadsheet: &SpreadsheetRef,
    sheet: &str,
    column: Column,
) -> error_stack::Result<Row, RecorderError> {
    let populated = backend
        .read_column(spreadsheet, sheet, column, FIRST_ENTRY_ROW)
        .await
        .change_context(RecorderError::NextRow)?;

    Ok(FIRST_ENTRY_ROW + populated.len())
}

/// Consumes input lines until end of stream or until `interrupt` resolves,
/// writing each valid ID beneath the previous one. Every write is a blocking
/// round trip completed before the next line is consumed, so a crash loses
/// at most the in-flight line. Returns the number of IDs written.
pub async fn record_entries<I, S>(
    backend: &impl Spreadsheet,
    spreadsheet: &SpreadsheetRef,
    sheet: &str,
    column: Column,
    lines: &mut Lines<I>,
    interrupt: S,
    reporter: &mut impl EntryReporter,
) -> error_stack::Result<u32, RecorderError>
where
    I: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut cursor = next_empty_row(backend, spreadsheet, sheet, column).await?;
    let mut accepted: u32 = 0;

    tokio::pin!(interrupt);
    loop {
        let line = tokio::select! {
            biased;
            // An interruption ends the stream like end of input would;
            // everything already reported stands.
            _ = &mut interrupt => {
                info!("Interrupted, stopping input");
                break;
            }
            line = lines.next_line() => line.change_context(RecorderError::Input)?,
        };
        let Some(line) = line else { break };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<AttendanceId>() {
            Err(_) => {
                debug!("Rejected input: {line:?}");
                reporter.report(LineOutcome::Rejected { input: line });
            }
            Ok(id) => {
                backend
                    .write_cell(
                        spreadsheet,
                        sheet,
                        CellPosition {
                            col: column,
                            row: cursor,
                        },
                        id.as_str(),
                    )
                    .await
                    .change_context(RecorderError::Write)?;
                reporter.report(LineOutcome::Accepted { id: &id, row: cursor });
                cursor += 1;
                accepted += 1;
            }
        }
    }

    Ok(accepted)
}
