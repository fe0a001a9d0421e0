pub mod contact_us_form;
pub mod field;
pub mod form;
