use std::io;
use std::path::Path;

use tracing::warn;

use crate::domain::spreadsheet_ref::SpreadsheetRef;

/// Reloads the spreadsheet reference persisted by a previous run. A missing
/// or unparseable file behaves as if nothing was saved.
pub fn load(path: &Path) -> Option<SpreadsheetRef> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!("Could not read saved reference {}: {err}", path.display());
            return None;
        }
    };

    match SpreadsheetRef::from_token(contents.trim()) {
        Ok(reference) => Some(reference),
        Err(err) => {
            warn!(
                "Ignoring saved reference {}: {err}",
                path.display()
            );
            None
        }
    }
}

/// Persists the resolved reference, overwriting any prior value.
pub fn store(path: &Path, reference: &SpreadsheetRef) -> io::Result<()> {
    std::fs::write(path, reference.as_str())
}
