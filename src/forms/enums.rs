pub mod form_layout;
pub mod mode;
