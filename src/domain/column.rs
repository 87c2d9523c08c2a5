use std::{fmt::Formatter, str::FromStr};

use thiserror::Error;

/// 0-indexed spreadsheet column. Renders as the bijective base-26 letter
/// label used in A1 notation (0 -> A, 25 -> Z, 26 -> AA, ...), with no
/// letter ever standing for zero.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Column(u32);

impl Column {
    pub fn new(index: u32) -> Self {
        Column(index)
    }

    pub fn index(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", index_to_letters(self.0))
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Show both the numeric and letter representation
        write!(f, "Column(index: {}, letters: {})", self.0, self)
    }
}

/// Conversions: Others -> Column

impl From<u32> for Column {
    fn from(index: u32) -> Self {
        Column(index)
    }
}

impl From<usize> for Column {
    fn from(index: usize) -> Self {
        Column(index as u32)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColumnParseError {
    #[error("Empty column label")]
    Empty,
    #[error("Non-alphabetic character in column label")]
    NonAlphabeticCharacter,
}

impl FromStr for Column {
    type Err = ColumnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_col(s)
    }
}

/// Conversions: Column -> Others

impl From<Column> for u32 {
    fn from(col: Column) -> Self {
        col.0
    }
}

impl From<Column> for String {
    fn from(col: Column) -> Self {
        index_to_letters(col.0)
    }
}

pub fn parse_col<T: AsRef<str>>(col_str: T) -> Result<Column, ColumnParseError> {
    let col_str = col_str.as_ref();
    if col_str.is_empty() {
        return Err(ColumnParseError::Empty);
    }
    if col_str.chars().any(|c| !c.is_ascii_alphabetic()) {
        return Err(ColumnParseError::NonAlphabeticCharacter);
    }

    let ordinal = col_str
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .fold(0u32, |acc, c| acc * 26 + (c as u32 - 'A' as u32 + 1));

    Ok(Column(ordinal - 1))
}

// Bijective base-26: each letter carries 1..=26, so the usual positional
// division needs the extra `- 1` after every digit. Dropping it breaks
// every label past "Z".
fn index_to_letters(index: u32) -> String {
    let mut n = index as i64;
    let mut letters = Vec::new();
    while n >= 0 {
        letters.push((b'A' + (n % 26) as u8) as char);
        n = n / 26 - 1;
    }
    letters.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_display_a() {
        let col = Column(0);
        assert_eq!(col.to_string(), "A");
    }

    #[test]
    fn test_column_display_z() {
        let col = Column(25);
        assert_eq!(col.to_string(), "Z");
    }

    #[test]
    fn test_column_display_aa() {
        let col = Column(26);
        assert_eq!(col.to_string(), "AA");
    }

    #[test]
    fn test_column_display_ab() {
        let col = Column(27);
        assert_eq!(col.to_string(), "AB");
    }

    #[test]
    fn test_column_display_zz() {
        let col = Column(701);
        assert_eq!(col.to_string(), "ZZ");
    }

    #[test]
    fn test_column_display_aaa() {
        let col = Column(702);
        assert_eq!(col.to_string(), "AAA");
    }

    #[test]
    fn test_column_from_usize() {
        let col: Column = 5usize.into();
        assert_eq!(col, Column(5));
    }

    #[test]
    fn test_column_from_str_lower() {
        let col: Column = "a".parse().unwrap();
        assert_eq!(col, Column(0));
    }

    #[test]
    fn test_column_from_str_upper() {
        let col: Column = "A".parse().unwrap();
        assert_eq!(col, Column(0));
    }

    #[test]
    fn test_parse_col_valid() {
        assert_eq!(parse_col("Z").unwrap(), Column(25));
        assert_eq!(parse_col("AA").unwrap(), Column(26));
        assert_eq!(parse_col("AB").unwrap(), Column(27));
        assert_eq!(parse_col("zz").unwrap(), Column(701));
        assert_eq!(parse_col("aAa").unwrap(), Column(702));
    }

    #[test]
    fn test_parse_col_invalid() {
        assert!(matches!(
            parse_col("A1"),
            Err(ColumnParseError::NonAlphabeticCharacter)
        ));
        assert!(matches!(
            parse_col("$"),
            Err(ColumnParseError::NonAlphabeticCharacter)
        ));
        assert!(matches!(parse_col(""), Err(ColumnParseError::Empty)));
    }

    #[test]
    fn test_letters_and_index_are_mutual_inverses() {
        for index in 0u32..=1000 {
            let letters = index_to_letters(index);
            assert_eq!(
                parse_col(&letters).unwrap(),
                Column(index),
                "round trip failed for {index} ({letters})"
            );
        }
    }

    #[test]
    fn test_column_to_string_letters() {
        let col = Column(27);
        let s: String = col.into();
        assert_eq!(s, "AB");
    }
}
