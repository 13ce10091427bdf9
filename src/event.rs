//! Turn event normalization.
//!
//! The front-end delivers one JSON document per turn. Nothing here raises on
//! a bad shape: a missing or wrongly-typed field is simply absent, so the
//! dialog can still elicit whatever is missing.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::EventError;

/// Intent name used when the event carries none.
pub const UNKNOWN_INTENT: &str = "UnknownIntent";

/// One conversational turn, as received.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnEvent {
    intent_name: String,
    /// Slot map exactly as received (echoed back unmodified).
    slots: Value,
    transcript: Option<String>,
    session_attributes: Option<Map<String, Value>>,
}

impl TurnEvent {
    /// Decode a turn event from raw JSON text.
    pub fn from_json(text: &str) -> Result<Self, EventError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Normalize a decoded event. Never fails.
    pub fn from_value(event: &Value) -> Self {
        let session_state = event.get("sessionState");
        let intent = session_state.and_then(|s| s.get("intent"));

        let intent_name = intent
            .and_then(|i| i.get("name"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_INTENT)
            .to_string();

        let slots = intent
            .and_then(|i| i.get("slots"))
            .cloned()
            .unwrap_or(Value::Null);
        if !slots.is_object() {
            debug!(intent = %intent_name, "Slot map missing or not an object");
        }

        let session_attributes = session_state
            .and_then(|s| s.get("sessionAttributes"))
            .and_then(Value::as_object)
            .cloned();

        let transcript = event
            .get("inputTranscript")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);

        Self {
            intent_name,
            slots,
            transcript,
            session_attributes,
        }
    }

    /// Intent name, or [`UNKNOWN_INTENT`].
    pub fn intent_name(&self) -> &str {
        &self.intent_name
    }

    /// The slot map as received, `Null` if the event had none.
    pub fn slots(&self) -> &Value {
        &self.slots
    }

    /// Trimmed utterance for this turn, if any.
    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    /// Session attributes as received.
    pub fn session_attributes(&self) -> Option<&Map<String, Value>> {
        self.session_attributes.as_ref()
    }

    /// Interpreted value of a slot, trimmed.
    ///
    /// Absent when the slot is missing, not a `{value: {interpretedValue}}`
    /// object, or blank after trimming.
    pub fn get(&self, slot: &str) -> Option<String> {
        let entry = self.slots.get(slot)?;
        if entry.is_null() {
            return None;
        }
        let value = entry
            .get("value")
            .and_then(|v| v.get("interpretedValue"))
            .and_then(Value::as_str);
        match value {
            Some(raw) => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            None => {
                debug!(slot = %slot, "Slot entry not in expected shape, treating as absent");
                None
            }
        }
    }
}
