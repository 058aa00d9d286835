//! Webhook subscription handshake.

use serde::Deserialize;

/// Query parameters Meta sends when (re)subscribing the webhook.
#[derive(Debug, Default, Deserialize)]
pub struct VerificationRequest {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Handshake rejected: wrong mode or token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("webhook verification failed")]
pub struct VerifyError;

/// Return the challenge verbatim when mode is `subscribe` and the token
/// matches.
pub fn verify(request: &VerificationRequest, expected_token: &str) -> Result<String, VerifyError> {
    let mode_ok = request.mode.as_deref() == Some("subscribe");
    let token_ok = request.verify_token.as_deref() == Some(expected_token);

    if mode_ok && token_ok {
        Ok(request.challenge.clone().unwrap_or_default())
    } else {
        Err(VerifyError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: Option<&str>, token: Option<&str>, challenge: Option<&str>) -> VerificationRequest {
        VerificationRequest {
            mode: mode.map(String::from),
            verify_token: token.map(String::from),
            challenge: challenge.map(String::from),
        }
    }

    #[test]
    fn matching_subscribe_returns_challenge() {
        let req = request(Some("subscribe"), Some("secret"), Some("1158201444"));
        assert_eq!(verify(&req, "secret").unwrap(), "1158201444");
    }

    #[test]
    fn challenge_is_returned_verbatim() {
        let req = request(Some("subscribe"), Some("secret"), Some(" a b&c "));
        assert_eq!(verify(&req, "secret").unwrap(), " a b&c ");
    }

    #[test]
    fn missing_challenge_returns_empty() {
        let req = request(Some("subscribe"), Some("secret"), None);
        assert_eq!(verify(&req, "secret").unwrap(), "");
    }

    #[test]
    fn wrong_token_fails() {
        let req = request(Some("subscribe"), Some("guess"), Some("c"));
        assert_eq!(verify(&req, "secret"), Err(VerifyError));
    }

    #[test]
    fn wrong_mode_fails() {
        let req = request(Some("unsubscribe"), Some("secret"), Some("c"));
        assert!(verify(&req, "secret").is_err());
    }

    #[test]
    fn missing_fields_fail() {
        assert!(verify(&VerificationRequest::default(), "secret").is_err());
        assert!(verify(&request(Some("subscribe"), None, Some("c")), "secret").is_err());
    }

    #[test]
    fn token_comparison_is_exact() {
        let req = request(Some("subscribe"), Some("Secret"), Some("c"));
        assert!(verify(&req, "secret").is_err());
        let req = request(Some("SUBSCRIBE"), Some("secret"), Some("c"));
        assert!(verify(&req, "secret").is_err());
    }

    #[test]
    fn query_string_deserializes() {
        let query = "hub.mode=subscribe&hub.verify_token=sylvester_verify&hub.challenge=abc123";
        let uri: axum::http::Uri = format!("/webhook?{query}").parse().unwrap();
        let axum::extract::Query(parsed) =
            axum::extract::Query::<VerificationRequest>::try_from_uri(&uri).unwrap();
        assert_eq!(parsed.mode.as_deref(), Some("subscribe"));
        assert_eq!(parsed.verify_token.as_deref(), Some("sylvester_verify"));
        assert_eq!(parsed.challenge.as_deref(), Some("abc123"));
    }
}
