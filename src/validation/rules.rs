//! Field validators for the contact form
//!
//! Each validator maps raw input to a [`ValidationResult`]. The message is
//! picked by priority (empty, too short, too long, pattern, field rule) so a
//! single reason is reported for any invalid value.

use super::sanitize::sanitize_input;
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 500;

/// Domains rejected as throwaway inboxes (matched as a suffix of the domain)
pub const DISPOSABLE_DOMAINS: &[&str] = &["mailinator.com", "tempmail.com", "10minutemail.com"];

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s]{2,50}$").expect("valid name regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://|www\.").expect("valid link regex"));

/// Outcome of validating one field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Rejection reason; empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Validate a display name: 2-50 letters or spaces, Unicode letters allowed
pub fn validate_name(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    let sanitized = sanitize_input(value);
    let len = trimmed.chars().count();

    if trimmed.is_empty() {
        ValidationResult::invalid("Name is required")
    } else if len < NAME_MIN_LEN {
        ValidationResult::invalid("Name must be at least 2 characters")
    } else if len > NAME_MAX_LEN {
        ValidationResult::invalid("Name must be 50 characters or less")
    } else if !NAME_RE.is_match(&sanitized) {
        ValidationResult::invalid("Name can only contain letters and spaces")
    } else if sanitized != trimmed {
        ValidationResult::invalid("Invalid name")
    } else {
        ValidationResult::valid()
    }
}

/// Domain part of an address, lower-cased
fn email_domain(address: &str) -> Option<String> {
    address
        .split_once('@')
        .map(|(_, domain)| domain.to_lowercase())
}

/// Whether the address belongs to a disposable-mail provider
pub fn is_disposable(address: &str) -> bool {
    email_domain(address)
        .is_some_and(|domain| DISPOSABLE_DOMAINS.iter().any(|d| domain.ends_with(d)))
}

/// Validate an email address: conventional shape, at most 100 characters,
/// no disposable domains
pub fn validate_email(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    let sanitized = sanitize_input(value);

    if trimmed.is_empty() {
        ValidationResult::invalid("Email is required")
    } else if trimmed.chars().count() > EMAIL_MAX_LEN {
        ValidationResult::invalid("Email must be 100 characters or less")
    } else if !EMAIL_RE.is_match(&sanitized) {
        ValidationResult::invalid("Enter a valid email address")
    } else if is_disposable(&sanitized) {
        ValidationResult::invalid("Disposable email addresses are not allowed")
    } else if sanitized != trimmed {
        ValidationResult::invalid("Invalid email")
    } else {
        ValidationResult::valid()
    }
}

/// Validate a free-text message: 10-500 characters and no links
pub fn validate_message(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    let sanitized = sanitize_input(value);
    let len = trimmed.chars().count();

    if trimmed.is_empty() {
        ValidationResult::invalid("Message is required")
    } else if len < MESSAGE_MIN_LEN {
        ValidationResult::invalid("Message must be at least 10 characters")
    } else if len > MESSAGE_MAX_LEN {
        ValidationResult::invalid("Message must be 500 characters or less")
    } else if LINK_RE.is_match(trimmed) || LINK_RE.is_match(&sanitized) {
        ValidationResult::invalid("Message cannot contain URLs")
    } else if sanitized != trimmed {
        ValidationResult::invalid("Invalid message")
    } else {
        ValidationResult::valid()
    }
}
