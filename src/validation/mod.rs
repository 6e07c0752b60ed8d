//! Input sanitization and contact-field validation

mod rules;
mod sanitize;

pub use rules::{validate_email, validate_message, validate_name, ValidationResult};
pub use sanitize::sanitize_input;
