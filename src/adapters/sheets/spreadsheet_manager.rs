use std::fmt::Debug;

use async_trait::async_trait;
use error_stack::{report, ResultExt};
use google_sheets4::api::ValueRange;
use google_sheets4::Sheets;
use serde_json::Value;
use tracing::instrument;

use super::auth::SheetsAuthenticator;
use super::http_client::HttpsClient;
use super::value_range_factory::ValueRangeFactory;
use crate::domain::a1_notation::{A1Notation, ToA1Notation};
use crate::domain::cell_position::CellPosition;
use crate::domain::column::Column;
use crate::domain::row::Row;
use crate::domain::spreadsheet_ref::SpreadsheetRef;
use crate::ports::spreadsheet::{Spreadsheet, SpreadsheetError};

pub type SheetsHub =
    Sheets<google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>>;

pub fn sheets_hub(client: HttpsClient, auth: SheetsAuthenticator) -> SheetsHub {
    Sheets::new(client, auth)
}

/// `Spreadsheet` port implementation on top of the Sheets v4 API.
pub struct SpreadsheetManager {
    hub: SheetsHub,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager")
    }
}

impl SpreadsheetManager {
    pub fn new(hub: SheetsHub) -> Self {
        SpreadsheetManager { hub }
    }

    async fn read_range(
        &self,
        spreadsheet: &SpreadsheetRef,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(spreadsheet.as_str(), range.as_ref())
            .doit()
            .await
            .change_context(SpreadsheetError::ReadRange)
            .attach_printable_lazy(|| format!("range: {range}"))?;

        // The API omits `values` entirely when the range is empty.
        Ok(response.1.values.unwrap_or_default())
    }

    async fn write_range(
        &self,
        spreadsheet: &SpreadsheetRef,
        range: &A1Notation,
        value_range: ValueRange,
    ) -> error_stack::Result<(), SpreadsheetError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, spreadsheet.as_str(), range.as_ref())
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .change_context(SpreadsheetError::WriteRange)
            .attach_printable_lazy(|| format!("range: {range}"))?;

        Ok(())
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl Spreadsheet for SpreadsheetManager {
    #[instrument]
    async fn title(
        &self,
        spreadsheet: &SpreadsheetRef,
    ) -> error_stack::Result<String, SpreadsheetError> {
        let response = self
            .hub
            .spreadsheets()
            .get(spreadsheet.as_str())
            .param("fields", "properties.title")
            .doit()
            .await
            .change_context(SpreadsheetError::FetchTitle)?;

        response
            .1
            .properties
            .and_then(|properties| properties.title)
            .ok_or(report!(SpreadsheetError::FetchTitle))
            .attach_printable("title not present in spreadsheet response")
    }

    #[instrument]
    async fn sheet_names(
        &self,
        spreadsheet: &SpreadsheetRef,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
        let response = self
            .hub
            .spreadsheets()
            .get(spreadsheet.as_str())
            .param("fields", "sheets.properties.title")
            .doit()
            .await
            .change_context(SpreadsheetError::ListSheets)?;

        Ok(response
            .1
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|properties| properties.title))
            .collect())
    }

    #[instrument]
    async fn read_row(
        &self,
        spreadsheet: &SpreadsheetRef,
        sheet: &str,
        row: Row,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
        let range = A1Notation(format!("'{sheet}'!{row}:{row}"));
        let values = self.read_range(spreadsheet, &range).await?;

        Ok(values
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(cell_text)
            .collect())
    }

    #[instrument]
    async fn read_column(
        &self,
        spreadsheet: &SpreadsheetRef,
        sheet: &str,
        column: Column,
        from_row: Row,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
        let range = A1Notation(format!("'{sheet}'!{column}{from_row}:{column}"));
        let values = self.read_range(spreadsheet, &range).await?;

        Ok(values.into_iter().flatten().map(cell_text).collect())
    }

    #[instrument]
    async fn write_cell(
        &self,
        spreadsheet: &SpreadsheetRef,
        sheet: &str,
        position: CellPosition,
        value: &str,
    ) -> error_stack::Result<(), SpreadsheetError> {
        let range = position.to_a1_notation(Some(sheet));
        self.write_range(spreadsheet, &range, ValueRange::from_single_cell(value))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_string() {
        assert_eq!(cell_text(Value::String("0012345".into())), "0012345");
    }

    #[test]
    fn test_cell_text_number() {
        assert_eq!(cell_text(Value::from(42)), "42");
    }
}
