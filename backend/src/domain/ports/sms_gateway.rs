//! Driven port for SMS delivery.
//!
//! The port is infallible by type: delivery is best-effort and every
//! failure mode is a value, so one bad number can never abort a broadcast
//! and callers can assert on outcomes instead of logs.

use async_trait::async_trait;
use serde::Serialize;

/// Why a send was skipped without attempting the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SmsSkipReason {
    /// API token or sender id absent; sending is disabled.
    NotConfigured,
    /// Recipient did not normalise to a supported number.
    InvalidRecipient,
}

/// Outcome of one send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SmsOutcome {
    /// Provider acknowledged the message.
    Sent,
    /// No network call was made.
    Skipped {
        /// Why the send was skipped.
        reason: SmsSkipReason,
    },
    /// The attempt failed in transport, at the provider, or in decoding.
    Failed {
        /// Failure detail for the report.
        message: String,
    },
}

impl SmsOutcome {
    /// Whether the provider acknowledged the message.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Port for delivering one text message to one phone number.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Deliver `message` to `to` (any local format), absorbing all failures
    /// into the returned outcome.
    async fn send(&self, to: &str, message: &str) -> SmsOutcome;
}

/// Fixture gateway that reports every message as sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSmsGateway;

#[async_trait]
impl SmsGateway for FixtureSmsGateway {
    async fn send(&self, _to: &str, _message: &str) -> SmsOutcome {
        SmsOutcome::Sent
    }
}
