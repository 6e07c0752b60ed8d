//! Contact form controller
//!
//! Wires field edits to debounced validation, focus changes to immediate
//! validation, and the submit action to the submitter.

use super::debounce::{Debouncer, PendingValidation, DEFAULT_DEBOUNCE};
use super::field::FieldKind;
use super::form_state::{ContactForm, Form};
use crate::error::SiteError;
use crate::site::Page;
use crate::submit::{ContactSubmission, FormSubmitter, SubmissionReceipt, REDACTED};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Alert shown after a successful submission
pub const SUCCESS_ALERT: &str = "Form submitted successfully!";
/// Alert shown when the submitter fails
pub const FAILURE_ALERT: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    pub debounce: Duration,
    /// Sanitize the payload and redact every value in logs
    pub defensive: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            defensive: true,
        }
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(SubmissionReceipt),
    /// The submitter failed; values are kept
    Failed(String),
    /// Nothing was sent; focus moved to the first invalid field
    Invalid { focus: Option<FieldKind> },
}

impl SubmitOutcome {
    /// Alert to show, if any
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            Self::Submitted(_) => Some(SUCCESS_ALERT),
            Self::Failed(_) => Some(FAILURE_ALERT),
            Self::Invalid { .. } => None,
        }
    }
}

pub struct FormController<S: FormSubmitter> {
    form: ContactForm,
    debouncer: Debouncer,
    submitter: S,
    defensive: bool,
    /// Whether keyboard focus is inside the form
    focused: bool,
}

impl<S: FormSubmitter> FormController<S> {
    /// Attach to the page's contact form. Fails when the form, its submit
    /// button, or any field or error element is missing.
    pub fn attach(
        page: &Page,
        submitter: S,
        options: ControllerOptions,
        tx: UnboundedSender<PendingValidation>,
    ) -> Result<Self, SiteError> {
        let element = page
            .contact_form()
            .ok_or_else(|| SiteError::missing("contact-form", "#contact-form"))?;
        if !element.submit_button {
            return Err(SiteError::missing(
                "contact-form",
                format!("#{} button[type=submit]", element.id),
            ));
        }
        for kind in FieldKind::ALL {
            if !element.has_input(kind.id()) {
                return Err(SiteError::missing("contact-form", format!("#{}", kind.id())));
            }
            if !element.has_error_element(kind.error_id()) {
                return Err(SiteError::missing(
                    "contact-form",
                    format!("#{}", kind.error_id()),
                ));
            }
        }

        let debouncer = Debouncer::new(options.debounce, tx);
        tracing::debug!(
            form = %element.id,
            defensive = options.defensive,
            debounce = ?debouncer.delay(),
            "Contact form attached"
        );
        Ok(Self {
            form: ContactForm::new(),
            debouncer,
            submitter,
            defensive: options.defensive,
            focused: false,
        })
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Move keyboard focus into the form
    pub fn enter(&mut self, kind: FieldKind) {
        self.focused = true;
        self.form.focus(kind);
    }

    /// Move keyboard focus out of the form, blurring the active field
    pub fn leave(&mut self) {
        self.blur();
        self.focused = false;
    }

    /// Type a character into the active field
    pub fn input(&mut self, c: char) {
        let Some(kind) = self.form.active_kind() else {
            return;
        };
        if c == '\n' && !kind.is_multiline() {
            return;
        }
        self.form.field_mut(kind).push_char(c);
        self.debouncer.schedule(kind);
    }

    pub fn backspace(&mut self) {
        if let Some(kind) = self.form.active_kind() {
            self.form.field_mut(kind).pop_char();
            self.debouncer.schedule(kind);
        }
    }

    /// Append pasted text to the active field as one input event
    pub fn paste(&mut self, text: &str) {
        let Some(kind) = self.form.active_kind() else {
            return;
        };
        let mut value = self.form.field(kind).value.clone();
        value.extend(
            text.chars()
                .filter(|c| *c != '\r')
                .map(|c| if c == '\n' && !kind.is_multiline() { ' ' } else { c }),
        );
        self.set_value(kind, &value);
    }

    /// Replace a field's value as one input event
    pub fn set_value(&mut self, kind: FieldKind, value: &str) {
        self.form.field_mut(kind).value = value.to_string();
        self.debouncer.schedule(kind);
    }

    /// Focus leaves the active field: validate it now
    pub fn blur(&mut self) {
        if let Some(kind) = self.form.active_kind() {
            self.debouncer.cancel(kind);
            self.validate_field(kind);
        }
    }

    pub fn focus_next(&mut self) {
        self.blur();
        self.form.next_field();
    }

    pub fn focus_prev(&mut self) {
        self.blur();
        self.form.prev_field();
    }

    /// A debounce timer fired; validate unless it was superseded
    pub fn on_debounce(&mut self, fired: PendingValidation) -> bool {
        if !self.debouncer.claim(fired) {
            return false;
        }
        self.validate_field(fired.field);
        true
    }

    pub fn validate_field(&mut self, kind: FieldKind) -> bool {
        let field = self.form.field_mut(kind);
        let is_valid = field.validate();
        let value = if self.defensive || kind == FieldKind::Email {
            REDACTED
        } else {
            field.value.as_str()
        };
        tracing::debug!(
            field = kind.id(),
            is_valid,
            message = field.error_text(),
            value,
            "Field validated"
        );
        is_valid
    }

    pub fn can_submit(&self) -> bool {
        self.form.submit_enabled()
    }

    /// First half of a submission: validate everything and build the payload,
    /// or move focus to the first invalid field.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitOutcome> {
        self.debouncer.cancel_all();
        for kind in FieldKind::ALL {
            self.validate_field(kind);
        }

        if !self.form.is_valid() {
            let focus = self.form.first_invalid();
            if let Some(kind) = focus {
                let err = SiteError::Validation {
                    field: kind.id(),
                    message: self.form.field(kind).error_text().to_string(),
                };
                tracing::info!(error = %err, "Form validation failed");
                self.focused = true;
                self.form.focus(kind);
            }
            return Err(SubmitOutcome::Invalid { focus });
        }

        self.form.submitting = true;
        Ok(self.payload())
    }

    /// Second half of a submission: send the payload and settle the form
    pub async fn finish_submit(&mut self, payload: ContactSubmission) -> SubmitOutcome {
        let result = self.submitter.submit(&payload).await;
        self.form.submitting = false;

        match result {
            Ok(receipt) => {
                self.debouncer.cancel_all();
                self.form.reset();
                SubmitOutcome::Submitted(receipt)
            }
            Err(err) => {
                tracing::error!(error = %err, "Form submission failed");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }

    fn payload(&self) -> ContactSubmission {
        let value = |kind: FieldKind| {
            let field = self.form.field(kind);
            if self.defensive {
                field.sanitized.clone()
            } else {
                field.value.trim().to_string()
            }
        };
        ContactSubmission {
            name: value(FieldKind::Name),
            email: value(FieldKind::Email),
            message: value(FieldKind::Message),
        }
    }
}
