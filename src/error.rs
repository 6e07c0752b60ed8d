//! Error taxonomy for page widgets and the contact form

use thiserror::Error;

/// Errors raised while attaching widgets, validating or submitting
#[derive(Debug, Error)]
pub enum SiteError {
    /// A page element a widget depends on is absent; only that widget is disabled
    #[error("{widget}: missing element `{selector}`")]
    MissingElement {
        widget: &'static str,
        selector: String,
    },

    /// A field failed validation; shown inline next to the field
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The submitter rejected the form; shown as a blocking alert
    #[error("submission failed: {0}")]
    Submission(String),

    /// Navigation targeted a page the site does not define
    #[error("unknown page `{0}`")]
    UnknownPage(String),

    /// The site document could not be parsed
    #[error("invalid site document: {0}")]
    Document(#[from] serde_json::Error),
}

impl SiteError {
    pub fn missing(widget: &'static str, selector: impl Into<String>) -> Self {
        Self::MissingElement {
            widget,
            selector: selector.into(),
        }
    }

    /// Whether the error only affects a single widget or field
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Document(_))
    }
}
