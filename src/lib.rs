//! SIA relay — WhatsApp webhook to AI completion bridge.

pub mod channels;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod webhook;
