//! Contact form state: fields, focus ring and submit gating

use super::field::{FieldKind, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The `#contact-form` state
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    /// Focus ring position: 0-2 are fields, 3 is the submit button
    pub active_field_index: usize,
    /// Set while a submission is in flight
    pub submitting: bool,
}

impl ContactForm {
    /// Focus ring index of the submit button
    pub const SUBMIT_BUTTON: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldKind::Name),
            email: FormField::new(FieldKind::Email),
            message: FormField::new(FieldKind::Message),
            active_field_index: 0,
            submitting: false,
        }
    }

    pub fn field(&self, kind: FieldKind) -> &FormField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Message => &mut self.message,
        }
    }

    /// Fields in focus order
    pub fn fields(&self) -> [&FormField; 3] {
        [&self.name, &self.email, &self.message]
    }

    /// The field holding focus, `None` when the submit button has it
    pub fn active_kind(&self) -> Option<FieldKind> {
        FieldKind::from_index(self.active_field_index)
    }

    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_BUTTON
    }

    pub fn focus(&mut self, kind: FieldKind) {
        self.set_active_field(kind.index());
    }

    /// Overall validity: every field is Valid
    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|f| f.is_valid())
    }

    /// Whether the submit button is enabled
    pub fn submit_enabled(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    /// Mirrors the submit button's `aria-disabled` attribute
    pub fn aria_disabled(&self) -> bool {
        !self.submit_enabled()
    }

    /// First field (in focus order) whose last validation failed
    pub fn first_invalid(&self) -> Option<FieldKind> {
        self.fields()
            .iter()
            .find(|f| f.aria_invalid())
            .map(|f| f.kind)
    }

    /// Clear every value and error and return focus to the first field
    pub fn reset(&mut self) {
        for kind in FieldKind::ALL {
            self.field_mut(kind).reset();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_BUTTON);
    }
}
