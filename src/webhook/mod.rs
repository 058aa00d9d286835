//! WhatsApp webhook: handshake, payload extraction and HTTP routes.

pub mod payload;
pub mod routes;
pub mod verify;

pub use routes::{RelayState, webhook_routes};
