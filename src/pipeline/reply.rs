//! Reply generation with fixed-text fallback.
//!
//! A sender always gets some reply: when the completion service is missing
//! or fails, the reply is one of two fixed SIA messages.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::llm::provider::{ChatMessage, CompletionRequest, LlmProvider};
use crate::pipeline::types::{FallbackReason, InboundMessage, ReplyResult};

/// Sent when a message arrives without a text body.
pub const PROMPT_FOR_TEXT: &str = "Hi, I’m SIA (Spectrum Intelligent Assistant). Please send me a text message so I can assist you.";

/// Sent when the completion service is unconfigured or failed.
pub const NO_AI_CAPACITY: &str = "Hi, I’m SIA (Spectrum Intelligent Assistant). I don’t have enough credit to reply with my full AI brain right now, but your WhatsApp connection is working and I’ll respond properly soon.";

/// Fixed reply text for each fallback reason.
pub fn fallback_text(reason: FallbackReason) -> &'static str {
    match reason {
        FallbackReason::MissingText => PROMPT_FOR_TEXT,
        FallbackReason::AiUnavailable | FallbackReason::UpstreamFailure => NO_AI_CAPACITY,
    }
}

/// Produces reply text for an inbound message.
pub struct ReplyGenerator {
    llm: Option<Arc<dyn LlmProvider>>,
    system_prompt: String,
}

impl ReplyGenerator {
    /// Create a generator. `llm` is `None` when no completion key is set.
    pub fn new(llm: Option<Arc<dyn LlmProvider>>, system_prompt: impl Into<String>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
        }
    }

    /// Generate a reply. Never fails; upstream errors become fallback text.
    pub async fn generate(&self, message: &InboundMessage) -> ReplyResult {
        let Some(text) = message.text.as_deref() else {
            debug!(id = %message.id, "Message has no text body, prompting for text");
            return ReplyResult::fallback(fallback_text(FallbackReason::MissingText));
        };

        let Some(llm) = self.llm.as_ref() else {
            debug!(id = %message.id, "No completion provider configured");
            return ReplyResult::fallback(fallback_text(FallbackReason::AiUnavailable));
        };

        let request = CompletionRequest::new(vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(text),
        ]);

        match llm.complete(request).await {
            Ok(response) => {
                info!(
                    id = %message.id,
                    model = llm.model_name(),
                    reply_len = response.content.len(),
                    "Generated AI reply"
                );
                ReplyResult::ai(response.content)
            }
            Err(e) => {
                error!(
                    id = %message.id,
                    error = %e,
                    "Completion failed, using fallback SIA message"
                );
                ReplyResult::fallback(fallback_text(FallbackReason::UpstreamFailure))
            }
        }
    }
}
