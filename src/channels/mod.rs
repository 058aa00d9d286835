//! Outbound channels that deliver replies to senders.

pub mod whatsapp;

pub use whatsapp::WhatsAppChannel;

use async_trait::async_trait;

use crate::error::ChannelError;

/// Something that can deliver a text reply to a recipient.
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &str;

    /// Send `text` to `to`. Returns the platform's response body.
    async fn send_text(&self, to: &str, text: &str) -> Result<serde_json::Value, ChannelError>;
}
