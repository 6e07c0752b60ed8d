//! Contact form submission

mod client;
mod traits;

pub use client::{ContactSubmission, SimulatedSubmitter, SubmissionReceipt, REDACTED};
pub use traits::FormSubmitter;

#[cfg(test)]
pub use traits::MockFormSubmitter;
