//! Optional enrichment collaborators.
//!
//! Sentiment classification, speech synthesis and object storage live behind
//! single-operation traits. None of them may fail a turn: the advisor and the
//! renderer in this module turn every error into a safe default.

pub mod sentiment;
pub mod voice;

pub use sentiment::{SentimentAdvisor, SentimentVerdict};
pub use voice::VoiceRenderer;

use async_trait::async_trait;

use crate::error::EnrichmentError;

/// Classifies the sentiment of an utterance.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Returns the provider's label, e.g. `"NEGATIVE"`.
    async fn classify(&self, text: &str, language: &str) -> Result<String, EnrichmentError>;
}

/// Renders text to audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, EnrichmentError>;
}

/// Persists a binary object and returns a retrievable reference (URL).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn store(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, EnrichmentError>;
}
