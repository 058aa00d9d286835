//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Verify token expected in the platform's subscription handshake.
pub const DEFAULT_VERIFY_TOKEN: &str = "sylvester_verify";

/// Persona given to the completion service ahead of every user message.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are SIA (Spectrum Intelligent Assistant), a helpful, polite banking and general assistant.";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_GRAPH_API_VERSION: &str = "v20.0";

/// Process-wide relay configuration.
///
/// Built once at startup and shared read-only (behind `Arc`) with every
/// component. Missing credentials are valid states: without a completion
/// key every reply is the fallback text, and without platform credentials
/// deliveries are recorded as failed.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Token compared against `hub.verify_token` during the handshake.
    pub verify_token: String,
    /// Bearer token for the WhatsApp Cloud API.
    pub whatsapp_token: Option<SecretString>,
    /// Business phone-number id messages are sent from.
    pub phone_number_id: Option<String>,
    /// Bearer key for the completion service.
    pub openai_api_key: Option<SecretString>,
    pub model: String,
    pub system_prompt: String,
    pub openai_base_url: String,
    pub graph_base_url: String,
    pub graph_api_version: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            verify_token: DEFAULT_VERIFY_TOKEN.to_string(),
            whatsapp_token: None,
            phone_number_id: None,
            openai_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            graph_api_version: DEFAULT_GRAPH_API_VERSION.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl RelayConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = get("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let openai_base_url = get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url);
        validate_url("OPENAI_BASE_URL", &openai_base_url)?;

        let graph_base_url = get("WHATSAPP_GRAPH_URL").unwrap_or(defaults.graph_base_url);
        validate_url("WHATSAPP_GRAPH_URL", &graph_base_url)?;

        Ok(Self {
            verify_token: get("WHATSAPP_VERIFY_TOKEN").unwrap_or(defaults.verify_token),
            whatsapp_token: get("WHATSAPP_TOKEN").map(SecretString::from),
            phone_number_id: get("PHONE_NUMBER_ID"),
            openai_api_key: get("OPENAI_API_KEY").map(SecretString::from),
            model: get("SIA_MODEL").unwrap_or(defaults.model),
            system_prompt: get("SIA_SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
            openai_base_url: openai_base_url.trim_end_matches('/').to_string(),
            graph_base_url: graph_base_url.trim_end_matches('/').to_string(),
            graph_api_version: get("WHATSAPP_API_VERSION").unwrap_or(defaults.graph_api_version),
            port,
        })
    }

    /// Whether replies can be generated by the completion service.
    pub fn ai_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Non-fatal problems worth surfacing at startup.
    pub fn startup_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.whatsapp_token.is_none() || self.phone_number_id.is_none() {
            warnings.push(
                "Missing WHATSAPP_TOKEN or PHONE_NUMBER_ID; replies cannot be delivered".to_string(),
            );
        }
        if self.openai_api_key.is_none() {
            warnings.push(
                "No OPENAI_API_KEY set; every reply will use the fallback SIA message".to_string(),
            );
        }
        warnings
    }
}

fn validate_url(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected an http(s) URL, got '{value}'"),
        })
    }
}
