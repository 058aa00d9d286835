//! Shared types for the relay pipeline.

use uuid::Uuid;

// ── Inbound message ─────────────────────────────────────────────────

/// A text-or-not message pulled out of one webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    /// Relay-local id used to correlate log lines for this request.
    pub id: Uuid,
    /// Sender's WhatsApp id (phone number); replies go back here.
    pub sender: String,
    /// Sender's profile name, when the platform includes it.
    pub sender_name: Option<String>,
    /// Text body. `None` for images, stickers, reactions and the like.
    pub text: Option<String>,
    /// Platform message id (`wamid.…`).
    pub platform_id: Option<String>,
    /// Platform message type (`text`, `image`, …).
    pub kind: Option<String>,
}

impl InboundMessage {
    pub fn new(sender: impl Into<String>, text: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: sender.into(),
            sender_name: None,
            text,
            platform_id: None,
            kind: None,
        }
    }
}

// ── Reply ───────────────────────────────────────────────────────────

/// Where a reply's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    AiGenerated,
    Fallback,
}

impl Provenance {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AiGenerated => "ai_generated",
            Self::Fallback => "fallback",
        }
    }
}

/// Why a reply fell back to fixed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The message carried no text body.
    MissingText,
    /// No completion credential is configured.
    AiUnavailable,
    /// The completion call failed in any way.
    UpstreamFailure,
}

/// Reply text plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyResult {
    pub text: String,
    pub provenance: Provenance,
}

impl ReplyResult {
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::AiGenerated,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::Fallback,
        }
    }
}

// ── Delivery ────────────────────────────────────────────────────────

/// Result of one send attempt. Only ever logged.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    /// The platform accepted the message; carries its response body.
    Sent { response: serde_json::Value },
    /// The send failed or could not be attempted.
    Failed { detail: String },
}

impl DeliveryOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Terminal state of one POST pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// The payload held no extractable message; nothing was sent.
    NoMessage,
    /// A reply was generated and a delivery attempted.
    Replied {
        message: InboundMessage,
        reply: ReplyResult,
        delivery: DeliveryOutcome,
    },
}
