pub mod date_column;
pub mod locator;
pub mod recorder;
