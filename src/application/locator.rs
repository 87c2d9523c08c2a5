use std::io;
use std::path::Path;

use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::info;

use crate::adapters::saved_ref;
use crate::domain::spreadsheet_ref::SpreadsheetRef;
use crate::ports::spreadsheet::Spreadsheet;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Invalid spreadsheet link")]
    InvalidReference,
    #[error("No sheet tabs found in spreadsheet")]
    EmptySpreadsheet,
    #[error("Failed to talk to the spreadsheet backend")]
    Backend,
    #[error("Failed to read a response from the terminal")]
    Prompt,
    #[error("Failed to persist the spreadsheet reference")]
    Persist,
}

/// Interactive questions asked while locating the spreadsheet. Kept as a
/// seam so the selection logic is testable without a terminal.
pub trait Prompt {
    /// Prints an informational message.
    fn show(&mut self, message: &str) -> io::Result<()>;
    /// Asks a question and reads one trimmed line. `None` on end of input.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// Resolves the spreadsheet to record into: offers to reuse the saved
/// reference (shown with its live title), otherwise asks for a share link.
/// The resolved reference is persisted unconditionally, reuse included.
pub async fn resolve_spreadsheet(
    backend: &impl Spreadsheet,
    prompt: &mut impl Prompt,
    saved_ref_path: &Path,
) -> error_stack::Result<SpreadsheetRef, LocatorError> {
    let mut resolved = None;

    if let Some(saved) = saved_ref::load(saved_ref_path) {
        let title = backend
            .title(&saved)
            .await
            .change_context(LocatorError::Backend)?;
        let answer = prompt
            .ask(&format!("Use previously saved Google Sheet ({title})? (y/n)"))
            .change_context(LocatorError::Prompt)?;
        if answer.as_deref().map(str::to_lowercase).as_deref() == Some("y") {
            resolved = Some(saved);
        }
    }

    let resolved = match resolved {
        Some(reference) => reference,
        None => {
            let link = prompt
                .ask(
                    "Enter the Google Sheet link \
                     (ensure that it is editable by the authorized account)",
                )
                .change_context(LocatorError::Prompt)?
                .ok_or(report!(LocatorError::Prompt))?;
            // A malformed link is fatal: re-entry means restarting the run.
            SpreadsheetRef::from_share_link(&link)
                .change_context(LocatorError::InvalidReference)?
        }
    };

    saved_ref::store(saved_ref_path, &resolved).change_context(LocatorError::Persist)?;
    info!("Using spreadsheet {resolved}");
    Ok(resolved)
}

/// Picks the sheet tab to use. A sole tab is taken directly; otherwise the
/// user chooses from a numbered list, re-prompted until the input is a valid
/// 1-based index.
pub async fn select_sheet(
    backend: &impl Spreadsheet,
    spreadsheet: &SpreadsheetRef,
    prompt: &mut impl Prompt,
) -> error_stack::Result<String, LocatorError> {
    let mut names = backend
        .sheet_names(spreadsheet)
        .await
        .change_context(LocatorError::Backend)?;

    if names.is_empty() {
        return Err(report!(LocatorError::EmptySpreadsheet));
    }
    if names.len() == 1 {
        return Ok(names.remove(0));
    }

    let mut listing = String::from("Available sheets:");
    for (i, name) in names.iter().enumerate() {
        listing.push_str(&format!("\n  {}. {name}", i + 1));
    }
    prompt.show(&listing).change_context(LocatorError::Prompt)?;

    loop {
        let answer = prompt
            .ask("Select sheet number:")
            .change_context(LocatorError::Prompt)?
            .ok_or(report!(LocatorError::Prompt))?;

        match answer.parse::<usize>() {
            Ok(choice) if (1..=names.len()).contains(&choice) => {
                return Ok(names.swap_remove(choice - 1));
            }
            Ok(_) => {
                prompt
                    .show(&format!(
                        "Please enter a number between 1 and {}",
                        names.len()
                    ))
                    .change_context(LocatorError::Prompt)?;
            }
            Err(_) => {
                prompt
                    .show("Invalid input, please enter a number")
                    .change_context(LocatorError::Prompt)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::domain::cell_position::CellPosition;
    use crate::domain::column::Column;
    use crate::domain::row::Row;
    use crate::ports::spreadsheet::SpreadsheetError;

    const TOKEN: &str = "1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuVwXyZ-_abcdEF";
    const OTHER_TOKEN: &str = "9z8Y7x6W5v4U3t2S1r0QpOnMlKjIhGfEdCbA-_zyxwVU";

    struct FakeBackend {
        title: &'static str,
        sheets: Vec<&'static str>,
    }

    #[async_trait::async_trait]
    impl Spreadsheet for FakeBackend {
        async fn title(
            &self,
            _spreadsheet: &SpreadsheetRef,
        ) -> error_stack::Result<String, SpreadsheetError> {
            Ok(self.title.to_string())
        }

        async fn sheet_names(
            &self,
            _spreadsheet: &SpreadsheetRef,
        ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
            Ok(self.sheets.iter().map(|s| s.to_string()).collect())
        }

        async fn read_row(
            &self,
            _spreadsheet: &SpreadsheetRef,
            _sheet: &str,
            _row: Row,
        ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
            Ok(vec![])
        }

        async fn read_column(
            &self,
            _spreadsheet: &SpreadsheetRef,
            _sheet: &str,
            _column: Column,
            _from_row: Row,
        ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
            Ok(vec![])
        }

        async fn write_cell(
            &self,
            _spreadsheet: &SpreadsheetRef,
            _sheet: &str,
            _position: CellPosition,
            _value: &str,
        ) -> error_stack::Result<(), SpreadsheetError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct ScriptedPrompt {
        answers: VecDeque<String>,
        shown: Vec<String>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn answering(answers: &[&str]) -> Self {
            ScriptedPrompt {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn show(&mut self, message: &str) -> io::Result<()> {
            self.shown.push(message.to_string());
            Ok(())
        }

        fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
            self.asked.push(message.to_string());
            Ok(self.answers.pop_front())
        }
    }

    fn backend() -> FakeBackend {
        FakeBackend {
            title: "Attendance 2026",
            sheets: vec!["Class A", "Class B", "Class C"],
        }
    }

    #[tokio::test]
    async fn test_resolve_reuses_saved_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".prev.txt");
        saved_ref::store(&path, &SpreadsheetRef::from_token(TOKEN).unwrap()).unwrap();

        let mut prompt = ScriptedPrompt::answering(&["y"]);
        let resolved = resolve_spreadsheet(&backend(), &mut prompt, &path)
            .await
            .unwrap();

        assert_eq!(resolved.as_str(), TOKEN);
        assert!(prompt.asked[0].contains("Attendance 2026"));
        // Reuse still rewrites the saved file.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TOKEN);
    }

    #[tokio::test]
    async fn test_resolve_declined_reuse_asks_for_link() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".prev.txt");
        saved_ref::store(&path, &SpreadsheetRef::from_token(TOKEN).unwrap()).unwrap();

        let link = format!("https://docs.google.com/spreadsheets/d/{OTHER_TOKEN}/edit");
        let mut prompt = ScriptedPrompt::answering(&["n", &link]);
        let resolved = resolve_spreadsheet(&backend(), &mut prompt, &path)
            .await
            .unwrap();

        assert_eq!(resolved.as_str(), OTHER_TOKEN);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), OTHER_TOKEN);
    }

    #[tokio::test]
    async fn test_resolve_bad_link_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".prev.txt");

        let mut prompt = ScriptedPrompt::answering(&["https://example.com/not-a-sheet"]);
        let result = resolve_spreadsheet(&backend(), &mut prompt, &path).await;

        assert!(matches!(
            result.unwrap_err().current_context(),
            LocatorError::InvalidReference
        ));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_select_sheet_empty_spreadsheet() {
        let backend = FakeBackend {
            title: "Empty",
            sheets: vec![],
        };
        let spreadsheet = SpreadsheetRef::from_token(TOKEN).unwrap();
        let mut prompt = ScriptedPrompt::default();

        let result = select_sheet(&backend, &spreadsheet, &mut prompt).await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            LocatorError::EmptySpreadsheet
        ));
    }

    #[tokio::test]
    async fn test_select_sheet_single_tab_skips_prompt() {
        let backend = FakeBackend {
            title: "One tab",
            sheets: vec!["Only"],
        };
        let spreadsheet = SpreadsheetRef::from_token(TOKEN).unwrap();
        let mut prompt = ScriptedPrompt::default();

        let selected = select_sheet(&backend, &spreadsheet, &mut prompt)
            .await
            .unwrap();
        assert_eq!(selected, "Only");
        assert!(prompt.asked.is_empty());
    }

    #[tokio::test]
    async fn test_select_sheet_reprompts_until_valid() {
        let spreadsheet = SpreadsheetRef::from_token(TOKEN).unwrap();
        let mut prompt = ScriptedPrompt::answering(&["abc", "9", "2"]);

        let selected = select_sheet(&backend(), &spreadsheet, &mut prompt)
            .await
            .unwrap();

        assert_eq!(selected, "Class B");
        assert!(prompt.shown[0].contains("1. Class A"));
        assert!(prompt
            .shown
            .iter()
            .any(|m| m == "Invalid input, please enter a number"));
        assert!(prompt
            .shown
            .iter()
            .any(|m| m == "Please enter a number between 1 and 3"));
    }
}
