pub mod saved_ref;
pub mod sheets;
