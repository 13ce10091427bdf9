//! Sentiment advice for the confirmation message.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SentimentClassifier;

/// Sentiment of the customer's utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentVerdict {
    Positive,
    Negative,
    Neutral,
    Mixed,
    /// Classification was attempted and failed.
    Unknown,
}

impl SentimentVerdict {
    /// Parse a provider label. Unrecognized labels are `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            "MIXED" => Self::Mixed,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for SentimentVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Mixed => "MIXED",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// Wraps an optional classifier and never fails.
pub struct SentimentAdvisor {
    classifier: Option<Arc<dyn SentimentClassifier>>,
    language: String,
}

impl SentimentAdvisor {
    pub fn new(classifier: Option<Arc<dyn SentimentClassifier>>, language: impl Into<String>) -> Self {
        Self {
            classifier,
            language: language.into(),
        }
    }

    /// Advisor with no classifier: always `Neutral`.
    pub fn disabled() -> Self {
        Self::new(None, "en")
    }

    /// Classify the utterance.
    ///
    /// No utterance or no classifier gives `Neutral` without a call. Any
    /// classifier error gives `Unknown`.
    pub async fn advise(&self, utterance: Option<&str>) -> SentimentVerdict {
        let Some(text) = utterance.map(str::trim).filter(|t| !t.is_empty()) else {
            return SentimentVerdict::Neutral;
        };
        let Some(classifier) = &self.classifier else {
            return SentimentVerdict::Neutral;
        };

        match classifier.classify(text, &self.language).await {
            Ok(label) => {
                let verdict = SentimentVerdict::from_label(&label);
                if verdict == SentimentVerdict::Unknown {
                    warn!(label = %label, "Unrecognized sentiment label");
                } else {
                    debug!(sentiment = %verdict, "Sentiment detected");
                }
                verdict
            }
            Err(e) => {
                warn!(error = %e, "Sentiment analysis failed, continuing without it");
                SentimentVerdict::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::EnrichmentError;

    struct FixedClassifier {
        label: Result<&'static str, &'static str>,
        calls: AtomicUsize,
    }

    impl FixedClassifier {
        fn new(label: Result<&'static str, &'static str>) -> Arc<Self> {
            Arc::new(Self {
                label,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SentimentClassifier for FixedClassifier {
        async fn classify(&self, _text: &str, language: &str) -> Result<String, EnrichmentError> {
            assert_eq!(language, "en");
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.label
                .map(String::from)
                .map_err(|e| EnrichmentError::Sentiment(e.to_string()))
        }
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(SentimentVerdict::from_label("negative"), SentimentVerdict::Negative);
        assert_eq!(SentimentVerdict::from_label(" MIXED "), SentimentVerdict::Mixed);
        assert_eq!(SentimentVerdict::from_label("angry"), SentimentVerdict::Unknown);
    }

    #[tokio::test]
    async fn no_utterance_is_neutral_without_call() {
        let classifier = FixedClassifier::new(Ok("NEGATIVE"));
        let advisor = SentimentAdvisor::new(Some(classifier.clone()), "en");
        assert_eq!(advisor.advise(None).await, SentimentVerdict::Neutral);
        assert_eq!(advisor.advise(Some("  ")).await, SentimentVerdict::Neutral);
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn classifier_label_drives_verdict() {
        let classifier = FixedClassifier::new(Ok("POSITIVE"));
        let advisor = SentimentAdvisor::new(Some(classifier.clone()), "en");
        assert_eq!(advisor.advise(Some("great")).await, SentimentVerdict::Positive);
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn classifier_failure_is_unknown() {
        let advisor = SentimentAdvisor::new(Some(FixedClassifier::new(Err("timeout"))), "en");
        assert_eq!(advisor.advise(Some("hello")).await, SentimentVerdict::Unknown);
    }

    #[tokio::test]
    async fn disabled_advisor_is_neutral() {
        let advisor = SentimentAdvisor::disabled();
        assert_eq!(advisor.advise(Some("awful day")).await, SentimentVerdict::Neutral);
    }

    #[test]
    fn serializes_as_provider_label() {
        let json = serde_json::to_string(&SentimentVerdict::Negative).unwrap();
        assert_eq!(json, "\"NEGATIVE\"");
    }
}
