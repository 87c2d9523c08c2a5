//! Command-line attendance recorder backed by Google Sheets.
//!
//! Authenticates against the Sheets API, resolves a spreadsheet (saved
//! reference or pasted link), finds or creates a column for today's date and
//! appends validated 7-digit attendance IDs into sequential rows of that
//! column, one blocking write per typed line.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod terminal;
