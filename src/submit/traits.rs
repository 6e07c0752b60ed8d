//! Trait abstraction for form submission to enable mocking in tests

use super::client::{ContactSubmission, SubmissionReceipt};
use crate::error::SiteError;
use async_trait::async_trait;

/// Sends a contact submission to the form's endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// POST the submission as a JSON body
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt, SiteError>;
}
