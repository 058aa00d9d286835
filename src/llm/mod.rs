//! LLM integration for the SIA relay.
//!
//! The relay talks to an OpenAI-compatible chat-completions endpoint via
//! `OpenAiProvider`; everything else depends only on the `LlmProvider`
//! trait so a stub can stand in during tests.

pub mod openai;
pub mod provider;

pub use openai::OpenAiProvider;
pub use provider::*;

use std::sync::Arc;

use crate::config::RelayConfig;

/// Create the completion provider, or `None` when no API key is configured.
pub fn create_provider(
    config: &RelayConfig,
    client: reqwest::Client,
) -> Option<Arc<dyn LlmProvider>> {
    let api_key = config.openai_api_key.clone()?;
    tracing::info!("Using OpenAI (model: {})", config.model);
    Some(Arc::new(OpenAiProvider::new(
        client,
        api_key,
        config.openai_base_url.clone(),
        config.model.clone(),
    )))
}
