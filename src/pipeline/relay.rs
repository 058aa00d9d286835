//! Relay pipeline — extract, generate, deliver.
//!
//! Runs after the webhook has been acknowledged, so nothing here can change
//! the HTTP response. Every branch ends in a `RelayOutcome`; failures are
//! logged and dropped.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::body::Bytes;
use futures::FutureExt;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::channels::ReplySender;
use crate::error::PipelineError;
use crate::pipeline::reply::ReplyGenerator;
use crate::pipeline::types::{DeliveryOutcome, InboundMessage, RelayOutcome};
use crate::webhook::payload;

/// Per-request relay from webhook body to delivered reply.
pub struct RelayPipeline {
    generator: ReplyGenerator,
    sender: Arc<dyn ReplySender>,
}

impl RelayPipeline {
    pub fn new(generator: ReplyGenerator, sender: Arc<dyn ReplySender>) -> Self {
        Self { generator, sender }
    }

    /// Process a raw webhook body.
    pub async fn handle_body(&self, body: &[u8]) -> RelayOutcome {
        match payload::extract_from_bytes(body) {
            Some(message) => self.relay(message).await,
            None => {
                debug!("No message object in webhook payload");
                RelayOutcome::NoMessage
            }
        }
    }

    /// Generate and deliver a reply for one extracted message.
    pub async fn relay(&self, message: InboundMessage) -> RelayOutcome {
        info!(
            id = %message.id,
            from = %message.sender,
            sender_name = message.sender_name.as_deref().unwrap_or("-"),
            platform_id = message.platform_id.as_deref().unwrap_or("-"),
            kind = message.kind.as_deref().unwrap_or("-"),
            text_len = message.text.as_ref().map(String::len),
            "Incoming message"
        );

        let reply = self.generator.generate(&message).await;
        let delivery = self.deliver(&message, &reply.text).await;

        info!(
            id = %message.id,
            provenance = reply.provenance.label(),
            delivered = delivery.is_sent(),
            "Relay finished"
        );

        RelayOutcome::Replied {
            message,
            reply,
            delivery,
        }
    }

    /// One send attempt. Failures are recorded, never propagated.
    async fn deliver(&self, message: &InboundMessage, text: &str) -> DeliveryOutcome {
        match self.sender.send_text(&message.sender, text).await {
            Ok(response) => {
                info!(
                    id = %message.id,
                    channel = self.sender.name(),
                    response = %response,
                    "Sent message"
                );
                DeliveryOutcome::Sent { response }
            }
            Err(e) => {
                error!(
                    id = %message.id,
                    channel = self.sender.name(),
                    error = %e,
                    "Send failed"
                );
                DeliveryOutcome::Failed {
                    detail: e.to_string(),
                }
            }
        }
    }
}

/// Run the pipeline for `body` on its own task.
///
/// A panic inside the pipeline is caught and returned as
/// `PipelineError::Panicked` after being logged; the process keeps serving.
pub fn spawn_relay(
    pipeline: Arc<RelayPipeline>,
    body: Bytes,
) -> JoinHandle<Result<RelayOutcome, PipelineError>> {
    tokio::spawn(async move {
        let result = AssertUnwindSafe(pipeline.handle_body(&body))
            .catch_unwind()
            .await
            .map_err(|panic| PipelineError::Panicked(panic_message(&*panic)));

        if let Err(ref e) = result {
            error!(error = %e, "Error in webhook handler");
        }
        result
    })
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
