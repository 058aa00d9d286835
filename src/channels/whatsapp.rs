//! WhatsApp channel — sends text replies through the Cloud API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::channels::ReplySender;
use crate::config::RelayConfig;
use crate::error::ChannelError;

const CHANNEL: &str = "whatsapp";

/// Sends messages via `POST /{version}/{phone_number_id}/messages`.
pub struct WhatsAppChannel {
    client: reqwest::Client,
    token: Option<SecretString>,
    phone_number_id: Option<String>,
    graph_base_url: String,
    api_version: String,
}

impl WhatsAppChannel {
    pub fn new(client: reqwest::Client, config: &RelayConfig) -> Self {
        Self {
            client,
            token: config.whatsapp_token.clone(),
            phone_number_id: config.phone_number_id.clone(),
            graph_base_url: config.graph_base_url.clone(),
            api_version: config.graph_api_version.clone(),
        }
    }

    fn messages_url(&self, phone_number_id: &str) -> String {
        format!(
            "{}/{}/{}/messages",
            self.graph_base_url.trim_end_matches('/'),
            self.api_version,
            phone_number_id
        )
    }
}

/// JSON body for a plain text message.
fn text_message_body(to: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "messaging_product": "whatsapp",
        "to": to,
        "text": { "body": text }
    })
}

#[async_trait]
impl ReplySender for WhatsAppChannel {
    fn name(&self) -> &str {
        CHANNEL
    }

    async fn send_text(&self, to: &str, text: &str) -> Result<serde_json::Value, ChannelError> {
        let token = self.token.as_ref().ok_or_else(|| ChannelError::NotConfigured {
            name: CHANNEL.into(),
            reason: "WHATSAPP_TOKEN not set".into(),
        })?;
        let phone_number_id =
            self.phone_number_id
                .as_deref()
                .ok_or_else(|| ChannelError::NotConfigured {
                    name: CHANNEL.into(),
                    reason: "PHONE_NUMBER_ID not set".into(),
                })?;

        let resp = self
            .client
            .post(self.messages_url(phone_number_id))
            .bearer_auth(token.expose_secret())
            .json(&text_message_body(to, text))
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed {
                name: CHANNEL.into(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ChannelError::HttpStatus {
                name: CHANNEL.into(),
                status: status.as_u16(),
                body: raw,
            });
        }

        // The Cloud API answers with JSON; keep anything else as a string.
        Ok(serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw)))
    }
}
