use std::fmt::Formatter;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Length of the document token Google embeds after `/d/` in share links.
pub const TOKEN_LEN: usize = 44;

lazy_static! {
    static ref LINK_TOKEN: Regex =
        Regex::new(r"/d/([A-Za-z0-9\-_]{44})").expect("link token pattern is valid");
}

/// Stable identifier of a spreadsheet document, extracted from a share link
/// and persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetRef(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("No 44-character id found in the provided link")]
    TokenNotFound,
    #[error("Id does not have the required length of 44 characters")]
    WrongLength,
    #[error("Id contains characters outside [A-Za-z0-9-_]")]
    InvalidCharacter,
}

impl SpreadsheetRef {
    /// Extracts the document token from a share link such as
    /// `https://docs.google.com/spreadsheets/d/<token>/edit`.
    pub fn from_share_link(link: &str) -> Result<Self, ReferenceError> {
        let captures = LINK_TOKEN
            .captures(link)
            .ok_or(ReferenceError::TokenNotFound)?;
        Self::from_token(&captures[1])
    }

    /// Validates a bare token, e.g. one reloaded from the saved-reference file.
    pub fn from_token(token: &str) -> Result<Self, ReferenceError> {
        if token.len() != TOKEN_LEN {
            return Err(ReferenceError::WrongLength);
        }
        if token
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && c != '-' && c != '_')
        {
            return Err(ReferenceError::InvalidCharacter);
        }
        Ok(SpreadsheetRef(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpreadsheetRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SpreadsheetRef> for String {
    fn from(reference: SpreadsheetRef) -> Self {
        reference.0
    }
}
