//! Error types for the SIA relay.

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Completion-service errors.
///
/// Every variant is absorbed by the reply generator and turned into the
/// fixed fallback text; none of them reach the sender.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} returned HTTP {status}: {body}")]
    HttpStatus {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Messaging-platform delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} is not configured: {reason}")]
    NotConfigured { name: String, reason: String },

    #[error("Failed to send message on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },

    #[error("Channel {name} returned HTTP {status}: {body}")]
    HttpStatus {
        name: String,
        status: u16,
        body: String,
    },
}

/// Errors that escape a single relay run.
///
/// Logged by the POST handler's background task; they never affect the
/// acknowledgment already sent to the platform.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Relay task panicked: {0}")]
    Panicked(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_status_error_mentions_code() {
        let err = LlmError::HttpStatus {
            provider: "openai".into(),
            status: 429,
            body: "insufficient_quota".into(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("insufficient_quota"));
    }

    #[test]
    fn channel_not_configured_names_channel() {
        let err = ChannelError::NotConfigured {
            name: "whatsapp".into(),
            reason: "WHATSAPP_TOKEN not set".into(),
        };
        assert_eq!(
            err.to_string(),
            "Channel whatsapp is not configured: WHATSAPP_TOKEN not set"
        );
    }
}
