//! Contact Submission
//!
//! The page only knows `submit(message) -> success | failure`. Transport is
//! not part of the site; the built-in submitter simulates the round trip.

use gloo_timers::future::TimeoutFuture;

use crate::config::ContactConfig;
use crate::models::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("message could not be encoded: {0}")]
    Encoding(String),
}

/// Simulated delivery: waits the configured latency, then accepts or
/// rejects the message.
pub async fn submit_contact(message: &ContactMessage, config: &ContactConfig) -> Result<(), SubmitError> {
    let payload = serde_json::to_string(message).map_err(|e| SubmitError::Encoding(e.to_string()))?;
    log::debug!("submitting contact message ({} bytes)", payload.len());
    TimeoutFuture::new(config.simulated_latency_ms).await;
    simulated_outcome(config.simulate_failure)
}

fn simulated_outcome(reject: bool) -> Result<(), SubmitError> {
    if reject {
        return Err(SubmitError::Rejected("simulated delivery failure".to_string()));
    }
    Ok(())
}
