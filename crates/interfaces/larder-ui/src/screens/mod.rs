pub mod detail;
pub mod form;
