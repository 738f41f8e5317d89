pub mod file;
pub mod form_value;
