//! Contact form domain layer
//!
//! Field values and validation state, the focus ring, the per-field
//! debounce timers that rate-limit validation while typing, and the
//! controller tying them to submission.

mod controller;
mod debounce;
mod field;
mod form_state;

pub use controller::{ControllerOptions, FormController, SubmitOutcome};
pub use debounce::{PendingValidation, DEFAULT_DEBOUNCE};
pub use field::{FieldKind, FormField};
pub use form_state::ContactForm;

#[cfg(test)]
pub use controller::{FAILURE_ALERT, SUCCESS_ALERT};
#[cfg(test)]
pub use field::FieldStatus;
