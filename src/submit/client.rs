//! Simulated submission endpoint
//!
//! No request leaves the machine. The payload is serialized exactly as it
//! would be sent, logged with personal data redacted, and acknowledged after
//! an optional latency.

use super::traits::FormSubmitter;
use crate::error::SiteError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Placeholder for values that must not reach the logs
pub const REDACTED: &str = "[redacted]";

/// The JSON body of a contact submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Copy safe to log: the email always hidden, everything hidden when `all`
    pub fn redacted(&self, all: bool) -> Self {
        let hide = |value: &str| {
            if all {
                REDACTED.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            name: hide(&self.name),
            email: REDACTED.to_string(),
            message: hide(&self.message),
        }
    }
}

/// Acknowledgement returned by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// Submitter that pretends to POST to the form action
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    endpoint: String,
    latency: Duration,
    fail: bool,
    redact_all: bool,
}

impl SimulatedSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            latency: Duration::ZERO,
            fail: false,
            redact_all: true,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every submission fail
    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    pub fn redact_all(mut self, redact_all: bool) -> Self {
        self.redact_all = redact_all;
        self
    }
}

#[async_trait]
impl FormSubmitter for SimulatedSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt, SiteError> {
        let body = serde_json::to_string(&submission.redacted(self.redact_all))?;
        tracing::info!(endpoint = %self.endpoint, body = %body, "POST contact form");

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail {
            tracing::warn!(endpoint = %self.endpoint, "Simulated submission failure");
            return Err(SiteError::Submission(format!(
                "{} responded with 503 Service Unavailable",
                self.endpoint
            )));
        }

        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };
        tracing::info!(id = %receipt.id, "Contact form accepted");
        Ok(receipt)
    }
}
