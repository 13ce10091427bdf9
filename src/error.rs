//! Error types for Order Assist.
//!
//! Missing and invalid slot values are ordinary dialog outcomes, not errors.
//! These types cover the boundaries that can actually fail: configuration,
//! decoding the raw event text, and the optional enrichment collaborators.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Event error: {0}")]
    Event(#[from] EventError),

    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors decoding a turn event.
///
/// Only raised when the input is not JSON at all. Structural problems inside
/// a JSON document degrade to absent fields instead.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Turn event is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the best-effort collaborators (sentiment, speech, storage).
///
/// Never surfaced to the user: callers substitute a safe default.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Sentiment classification failed: {0}")]
    Sentiment(String),

    #[error("Speech synthesis failed with voice {voice}: {reason}")]
    Synthesis { voice: String, reason: String },

    #[error("Failed to store {key} in {bucket}: {reason}")]
    Storage {
        bucket: String,
        key: String,
        reason: String,
    },

    #[error("Collaborator {0} is not configured")]
    Unavailable(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrichment_error_wraps_into_top_level() {
        let err: Error = EnrichmentError::Unavailable("speech".into()).into();
        assert_eq!(
            err.to_string(),
            "Enrichment error: Collaborator speech is not configured"
        );
    }

    #[test]
    fn storage_error_names_bucket_and_key() {
        let err = EnrichmentError::Storage {
            bucket: "audio".into(),
            key: "orders/a.mp3".into(),
            reason: "denied".into(),
        };
        let text = err.to_string();
        assert!(text.contains("audio"));
        assert!(text.contains("orders/a.mp3"));
    }

    #[test]
    fn event_error_from_bad_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = EventError::from(parse).into();
        assert!(err.to_string().starts_with("Event error: Turn event is not valid JSON"));
    }
}
