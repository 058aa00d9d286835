//! Message relay pipeline.
//!
//! Flow per webhook POST:
//! 1. Extract the first inbound message (or stop)
//! 2. Generate a reply, falling back to fixed text
//! 3. Deliver the reply through the outbound channel

pub mod relay;
pub mod reply;
pub mod types;

pub use relay::{RelayPipeline, spawn_relay};
pub use reply::ReplyGenerator;
pub use types::{DeliveryOutcome, InboundMessage, Provenance, RelayOutcome, ReplyResult};
