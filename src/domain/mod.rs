pub mod a1_notation;
pub mod attendance_id;
pub mod cell_position;
pub mod column;
pub mod row;
pub mod spreadsheet_ref;
