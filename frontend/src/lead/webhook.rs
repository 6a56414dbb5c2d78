use futures::future::{select, Either, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info};
use thiserror::Error;
use web_sys::RequestMode;

use crate::lead::form_state::{SubmitOutcome, SubmitPlan};
use crate::lead::models::{LeadDraft, LeadPayload};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("failed to encode lead payload: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("no answer within {0} ms")]
    TimedOut(u32),
}

/// The request left the browser without an error. In `no-cors` mode the
/// status is 0, so this says nothing about what the endpoint did with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivered {
    pub status: u16,
}

impl Delivered {
    pub fn is_opaque(&self) -> bool {
        self.status == 0
    }
}

pub trait WebhookTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<Delivered, TransportError>>;
}

/// Browser fetch through gloo-net, raced against a deadline.
pub struct GlooTransport {
    pub timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl WebhookTransport for GlooTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<Delivered, TransportError>> {
        async move {
            let request = Request::post(url)
                .header("Content-Type", "application/json")
                .mode(RequestMode::NoCors)
                .body(body);

            let send = Box::pin(request.send());
            let deadline = Box::pin(TimeoutFuture::new(self.timeout_ms));

            match select(send, deadline).await {
                Either::Left((Ok(response), _)) => Ok(Delivered {
                    status: response.status(),
                }),
                Either::Left((Err(e), _)) => Err(TransportError::Network(e.to_string())),
                Either::Right(_) => Err(TransportError::TimedOut(self.timeout_ms)),
            }
        }
        .boxed_local()
    }
}

pub async fn send_lead(
    transport: &dyn WebhookTransport,
    endpoint: &str,
    lead: &LeadDraft,
) -> Result<Delivered, TransportError> {
    let payload = LeadPayload::stamped_now(lead);
    let body =
        serde_json::to_string(&payload).map_err(|e| TransportError::Encode(e.to_string()))?;

    debug!("Posting lead to webhook {}", endpoint);
    transport.post_json(endpoint, body).await
}

/// Runs the network half of a submit. Transport failures are logged here
/// and handed back as an outcome; they never escape as errors.
pub async fn dispatch(plan: &SubmitPlan, transport: &dyn WebhookTransport) -> SubmitOutcome {
    let endpoint = match plan.endpoint.as_deref() {
        Some(endpoint) => endpoint,
        None => {
            info!("No webhook configured, skipping delivery");
            return SubmitOutcome::NotConfigured;
        }
    };

    match send_lead(transport, endpoint, &plan.lead).await {
        Ok(delivered) => {
            if delivered.is_opaque() {
                debug!("Webhook request sent (opaque response)");
            } else {
                debug!("Webhook request sent, status {}", delivered.status);
            }
            SubmitOutcome::Delivered
        }
        Err(e) => {
            error!("Failed to send lead to webhook: {}", e);
            SubmitOutcome::TransportFailed(e)
        }
    }
}
