//! Reqwest-backed SMS gateway adapter.
//!
//! This adapter owns transport details only: recipient normalisation, the
//! provider's request and acknowledgement shapes, and HTTP failure mapping.
//! Every failure path is absorbed into an [`SmsOutcome`] so a broadcast is
//! never aborted by one bad send.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::phone::Msisdn;
use crate::domain::ports::{SmsGateway, SmsOutcome, SmsSkipReason};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Provider credentials: both are required for sending to be enabled.
struct Credentials {
    api_token: String,
    sender_id: String,
}

/// Transport settings for the SMS provider.
pub struct SmsGatewayConfig {
    /// Provider send endpoint.
    pub endpoint: Url,
    /// Bearer token; `None` disables sending.
    pub api_token: Option<String>,
    /// Registered sender id; `None` disables sending.
    pub sender_id: Option<String>,
    /// Request timeout for the outbound POST.
    pub timeout: Duration,
}

impl SmsGatewayConfig {
    /// Build a configuration with the default request timeout.
    #[must_use]
    pub fn new(endpoint: Url, api_token: Option<String>, sender_id: Option<String>) -> Self {
        Self {
            endpoint,
            api_token,
            sender_id,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        }
    }
}

/// SMS gateway performing one HTTP POST per message.
///
/// When the token or sender id is absent the gateway degrades to a no-op:
/// every send returns `Skipped(NotConfigured)` and nothing leaves the
/// process. This keeps environments without SMS credentials (local dev,
/// CI) fully functional.
pub struct SmsHttpGateway {
    client: Client,
    endpoint: Url,
    credentials: Option<Credentials>,
}

impl SmsHttpGateway {
    /// Build the adapter, constructing a reqwest client with an explicit
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: SmsGatewayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let credentials = match (config.api_token, config.sender_id) {
            (Some(api_token), Some(sender_id)) => Some(Credentials {
                api_token,
                sender_id,
            }),
            _ => None,
        };
        Ok(Self {
            client,
            endpoint: config.endpoint,
            credentials,
        })
    }
}

#[derive(Serialize)]
struct SendRequestDto<'a> {
    to: &'a str,
    sender: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct AckDto {
    acknowledge: Option<String>,
}

fn parse_ack(body: &[u8]) -> Result<(), String> {
    let decoded: AckDto = serde_json::from_slice(body)
        .map_err(|error| format!("invalid provider response: {error}"))?;
    match decoded.acknowledge.as_deref() {
        Some("success") => Ok(()),
        Some(other) => Err(format!("provider acknowledged with: {other}")),
        None => Err("provider response missing acknowledge field".to_owned()),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{preview}...")
    } else {
        compact
    }
}

#[async_trait]
impl SmsGateway for SmsHttpGateway {
    async fn send(&self, to: &str, message: &str) -> SmsOutcome {
        let Some(credentials) = &self.credentials else {
            warn!("sms credentials missing; delivery disabled");
            return SmsOutcome::Skipped {
                reason: SmsSkipReason::NotConfigured,
            };
        };

        let msisdn = match Msisdn::normalize(to) {
            Ok(msisdn) => msisdn,
            Err(err) => {
                warn!(recipient = to, error = %err, "skipping sms to unusable number");
                return SmsOutcome::Skipped {
                    reason: SmsSkipReason::InvalidRecipient,
                };
            }
        };

        let payload = SendRequestDto {
            to: msisdn.as_str(),
            sender: &credentials.sender_id,
            message,
        };
        let response = match self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&credentials.api_token)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(recipient = %msisdn, error = %err, "sms transport failed");
                return SmsOutcome::Failed {
                    message: format!("transport: {err}"),
                };
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                warn!(recipient = %msisdn, error = %err, "sms response read failed");
                return SmsOutcome::Failed {
                    message: format!("transport: {err}"),
                };
            }
        };
        if !status.is_success() {
            let detail = body_preview(body.as_ref());
            warn!(recipient = %msisdn, status = status.as_u16(), detail, "sms rejected");
            return SmsOutcome::Failed {
                message: format!("status {}: {detail}", status.as_u16()),
            };
        }

        match parse_ack(body.as_ref()) {
            Ok(()) => SmsOutcome::Sent,
            Err(reason) => {
                warn!(recipient = %msisdn, reason, "sms not acknowledged");
                SmsOutcome::Failed { message: reason }
            }
        }
    }
}
