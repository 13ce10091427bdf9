//! Best-effort audio rendering of the confirmation message.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{ObjectStore, SpeechSynthesizer};
use crate::config::OrderConfig;
use crate::error::EnrichmentError;

/// Content type of synthesized audio objects.
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Synthesizes a message and stores the audio, yielding a reference.
pub struct VoiceRenderer {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    store: Option<Arc<dyn ObjectStore>>,
    voice_id: String,
    bucket: String,
    prefix: String,
}

impl VoiceRenderer {
    pub fn new(
        synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
        store: Option<Arc<dyn ObjectStore>>,
        config: &OrderConfig,
    ) -> Self {
        Self {
            synthesizer,
            store,
            voice_id: config.voice_id.clone(),
            bucket: config.audio_bucket.clone(),
            prefix: config.audio_prefix.clone(),
        }
    }

    /// Renderer with no collaborators: never produces audio.
    pub fn disabled() -> Self {
        Self::new(None, None, &OrderConfig::default())
    }

    /// Render `message` to audio. Any failure yields `None`.
    pub async fn render(&self, message: &str, customer_name: &str) -> Option<String> {
        let key = self.object_key(customer_name, Utc::now());
        match self.try_render(message, &key).await {
            Ok(reference) => {
                info!(key = %key, "Confirmation audio stored");
                Some(reference)
            }
            Err(EnrichmentError::Unavailable(what)) => {
                debug!(collaborator = %what, "Audio rendering skipped");
                None
            }
            Err(e) => {
                warn!(error = %e, "Audio rendering failed, sending text only");
                None
            }
        }
    }

    async fn try_render(&self, message: &str, key: &str) -> Result<String, EnrichmentError> {
        let synthesizer = self
            .synthesizer
            .as_ref()
            .ok_or_else(|| EnrichmentError::Unavailable("speech synthesizer".into()))?;
        let store = self
            .store
            .as_ref()
            .ok_or_else(|| EnrichmentError::Unavailable("object store".into()))?;

        let audio = synthesizer.synthesize(message, &self.voice_id).await?;
        store
            .store(&self.bucket, key, audio, AUDIO_CONTENT_TYPE)
            .await
    }

    /// `{prefix}/order_confirmation_{name}_{YYYYmmdd_HHMMSS}.mp3`
    pub fn object_key(&self, customer_name: &str, at: DateTime<Utc>) -> String {
        let name: String = customer_name
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let file = format!(
            "order_confirmation_{}_{}.mp3",
            name,
            at.format("%Y%m%d_%H%M%S")
        );
        let prefix = self.prefix.trim_end_matches('/');
        if prefix.is_empty() {
            file
        } else {
            format!("{prefix}/{file}")
        }
    }
}
