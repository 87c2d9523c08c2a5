use std::{fmt::Formatter, str::FromStr};

use thiserror::Error;

/// A validated attendance identifier: exactly 7 ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Attendance ID must be exactly 7 digits")]
pub struct InvalidAttendanceId;

impl AttendanceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AttendanceId {
    type Err = InvalidAttendanceId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 7 && s.chars().all(|c| c.is_ascii_digit()) {
            Ok(AttendanceId(s.to_owned()))
        } else {
            Err(InvalidAttendanceId)
        }
    }
}

impl std::fmt::Display for AttendanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
