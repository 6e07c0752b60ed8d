//! Contact form field value objects

use crate::validation::{
    sanitize_input, validate_email, validate_message, validate_name, ValidationResult,
};

/// The three contact form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    /// Identifier of the input element
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Identifier of the element showing the field's error text
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Message => "message-error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }

    /// Run the validator for this field
    pub fn validate(self, value: &str) -> ValidationResult {
        match self {
            Self::Name => validate_name(value),
            Self::Email => validate_email(value),
            Self::Message => validate_message(value),
        }
    }

    /// Position in the focus ring
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Validation state of a field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

/// A single contact field with its raw value and validation state
#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub value: String,
    /// Sanitized form of `value` as of the last validation
    pub sanitized: String,
    pub status: FieldStatus,
}

impl FormField {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            sanitized: String::new(),
            status: FieldStatus::Untouched,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.status, FieldStatus::Valid)
    }

    /// Mirrors the input's `aria-invalid` attribute
    pub fn aria_invalid(&self) -> bool {
        matches!(self.status, FieldStatus::Invalid(_))
    }

    /// Text of the field's error element (empty unless invalid)
    pub fn error_text(&self) -> &str {
        match &self.status {
            FieldStatus::Invalid(message) => message,
            _ => "",
        }
    }

    /// Validate the current value and record the outcome
    pub fn validate(&mut self) -> bool {
        let result = self.kind.validate(&self.value);
        self.sanitized = sanitize_input(&self.value);
        self.status = if result.is_valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid(result.message)
        };
        result.is_valid
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Back to the freshly loaded state
    pub fn reset(&mut self) {
        self.value.clear();
        self.sanitized.clear();
        self.status = FieldStatus::Untouched;
    }

    /// Get the display value for rendering (single line)
    pub fn display_value(&self) -> String {
        if self.kind.is_multiline() {
            self.value.replace('\n', " ↵ ")
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_untouched() {
        let field = FormField::new(FieldKind::Name);
        assert_eq!(field.status, FieldStatus::Untouched);
        assert!(!field.is_valid());
        assert!(!field.aria_invalid());
        assert_eq!(field.error_text(), "");
    }

    #[test]
    fn test_validate_records_invalid_message() {
        let mut field = FormField::new(FieldKind::Email);
        field.value = "not-an-email".to_string();
        assert!(!field.validate());
        assert!(field.aria_invalid());
        assert_eq!(field.error_text(), "Enter a valid email address");
    }

    #[test]
    fn test_validate_records_sanitized_value() {
        let mut field = FormField::new(FieldKind::Name);
        field.value = "  Jane Doe ".to_string();
        assert!(field.validate());
        assert_eq!(field.sanitized, "Jane Doe");
        assert_eq!(field.error_text(), "");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::new(FieldKind::Name);
        field.push_char('J');
        field.push_char('o');
        field.pop_char();
        assert_eq!(field.value, "J");
    }

    #[test]
    fn test_reset() {
        let mut field = FormField::new(FieldKind::Name);
        field.value = "J".to_string();
        field.validate();
        field.reset();
        assert_eq!(field.value, "");
        assert_eq!(field.status, FieldStatus::Untouched);
    }

    #[test]
    fn test_message_display_value_is_single_line() {
        let mut field = FormField::new(FieldKind::Message);
        field.value = "line one\nline two".to_string();
        assert_eq!(field.display_value(), "line one ↵ line two");
    }

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(FieldKind::Email.id(), "email");
        assert_eq!(FieldKind::Message.error_id(), "message-error");
        assert_eq!(FieldKind::from_index(2), Some(FieldKind::Message));
        assert_eq!(FieldKind::from_index(3), None);
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::from_index(kind.index()), Some(kind));
        }
    }
}
