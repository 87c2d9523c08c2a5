use super::a1_notation::{A1Notation, ToA1Notation};
use super::column::Column;
use super::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        match sheet_name {
            Some(sheet_name) => A1Notation(format!("'{}'!{}{}", sheet_name, self.col, self.row)),
            None => A1Notation(format!("{}{}", self.col, self.row)),
        }
    }
}
