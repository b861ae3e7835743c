pub mod datetime;
pub mod extractor;
pub mod flash;
pub mod parameter_error_handler;
pub mod validate;

pub use datetime::parse_due_date;
pub use extractor::SafeIDI64;
pub use parameter_error_handler::form_error_handler;
