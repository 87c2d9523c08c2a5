use std::fmt::Formatter;

/// 1-indexed spreadsheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Row(pub u32);

/// The date header lives in row 1.
pub const HEADER_ROW: Row = Row(1);
/// Attendance entries start directly beneath the header.
pub const FIRST_ENTRY_ROW: Row = Row(2);

impl<T: Into<Row>> std::ops::Add<T> for Row {
    type Output = Row;

    fn add(self, rhs: T) -> Self::Output {
        Row(self.0 + rhs.into().0)
    }
}

impl std::ops::AddAssign<u32> for Row {
    fn add_assign(&mut self, rhs: u32) {
        self.0 += rhs;
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Row {
    fn from(value: u32) -> Self {
        Row(value)
    }
}

impl From<usize> for Row {
    fn from(value: usize) -> Self {
        Row(value as u32)
    }
}

impl From<Row> for u32 {
    fn from(row: Row) -> Self {
        row.0
    }
}
