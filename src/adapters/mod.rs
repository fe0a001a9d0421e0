pub mod health_handler;
pub mod submission_handler;
pub mod submission_store;
pub mod ui_handler;
