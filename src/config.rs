//! Configuration types.

use crate::error::ConfigError;

/// Default audio bucket for order confirmations.
pub const DEFAULT_AUDIO_BUCKET: &str = "cs-chatbot-ordering-pizza";

/// Fulfillment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfig {
    /// Intent that drives the slot-filling flow.
    pub order_intent: String,
    /// Intent answered with a welcome message.
    pub greet_intent: String,
    /// Language code passed to the sentiment classifier.
    pub language: String,
    /// Voice used for confirmation audio.
    pub voice_id: String,
    /// Bucket that receives synthesized audio.
    pub audio_bucket: String,
    /// Key prefix for synthesized audio objects.
    pub audio_prefix: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            order_intent: "OrderingPizza".to_string(),
            greet_intent: "GreetIntent".to_string(),
            language: "en".to_string(),
            voice_id: "Joanna".to_string(),
            audio_bucket: DEFAULT_AUDIO_BUCKET.to_string(),
            audio_prefix: "orders".to_string(),
        }
    }
}

impl OrderConfig {
    /// Build configuration from `ORDER_ASSIST_*` environment variables.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            order_intent: env_or("ORDER_ASSIST_ORDER_INTENT", defaults.order_intent),
            greet_intent: env_or("ORDER_ASSIST_GREET_INTENT", defaults.greet_intent),
            language: env_or("ORDER_ASSIST_LANGUAGE", defaults.language),
            voice_id: env_or("ORDER_ASSIST_VOICE_ID", defaults.voice_id),
            audio_bucket: env_or("ORDER_ASSIST_AUDIO_BUCKET", defaults.audio_bucket),
            audio_prefix: env_or("ORDER_ASSIST_AUDIO_PREFIX", defaults.audio_prefix),
        }
    }

    /// Reject configurations that would produce unusable audio keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_intent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "order_intent".into(),
                message: "must not be empty".into(),
            });
        }
        if self.audio_prefix.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "audio_prefix".into(),
                message: "must be relative (no leading '/')".into(),
            });
        }
        Ok(())
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}
