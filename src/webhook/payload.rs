//! Inbound message extraction from WhatsApp webhook payloads.
//!
//! The platform posts the same envelope for messages, delivery statuses and
//! other events, so every level of `entry[0].changes[0].value.messages[0]`
//! is optional. Traversal is total: a missing step yields `None`.

use serde_json::Value;

use crate::pipeline::types::InboundMessage;

/// Parse a raw POST body and extract its first message.
///
/// Bodies that are not JSON are treated like payloads without a message.
pub fn extract_from_bytes(body: &[u8]) -> Option<InboundMessage> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    extract_message(&payload)
}

/// Extract the first message of the first change of the first entry.
pub fn extract_message(payload: &Value) -> Option<InboundMessage> {
    let value = payload
        .get("entry")
        .and_then(|entries| entries.get(0))
        .and_then(|entry| entry.get("changes"))
        .and_then(|changes| changes.get(0))
        .and_then(|change| change.get("value"))?;

    let message = value.get("messages").and_then(|messages| messages.get(0))?;

    let sender = message
        .get("from")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())?;

    let text = message
        .get("text")
        .and_then(|t| t.get("body"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from);

    let sender_name = value
        .get("contacts")
        .and_then(|contacts| contacts.get(0))
        .and_then(|contact| contact.get("profile"))
        .and_then(|profile| profile.get("name"))
        .and_then(Value::as_str)
        .map(String::from);

    let mut inbound = InboundMessage::new(sender, text);
    inbound.sender_name = sender_name;
    inbound.platform_id = message.get("id").and_then(Value::as_str).map(String::from);
    inbound.kind = message.get("type").and_then(Value::as_str).map(String::from);
    Some(inbound)
}
