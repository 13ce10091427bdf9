//! Dialog state machine. One turn in, one response out.
//!
//! Collecting → Collecting while any slot is missing or invalid, then
//! Collecting → Fulfilled once the whole table validates. Fulfilled is
//! terminal. No state is kept between turns: the caller re-sends the slot
//! map and the full table is revalidated every time.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::OrderConfig;
use crate::enrichment::{
    ObjectStore, SentimentAdvisor, SentimentClassifier, SpeechSynthesizer, VoiceRenderer,
};
use crate::event::TurnEvent;
use crate::response::{ComposedResponse, confirmation_message};
use crate::slots::{SlotTable, TableVerdict, names, validate};

/// Reply to the greeting intent.
pub const WELCOME_MESSAGE: &str = "Welcome to Pizza House! How may I help you?";

/// Reply to any intent this agent does not handle.
pub const FALLBACK_MESSAGE: &str =
    "I'm here to help you order a pizza or answer questions about our menu.";

/// Phase of the ordering intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    Collecting,
    Fulfilled,
}

impl DialogState {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: DialogState) -> bool {
        use DialogState::*;
        matches!(
            (self, target),
            (Collecting, Collecting) | (Collecting, Fulfilled)
        )
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Fulfilled)
    }

    /// Intent state reported to the front-end.
    pub fn intent_state(&self) -> &'static str {
        match self {
            Self::Collecting => "InProgress",
            Self::Fulfilled => "Fulfilled",
        }
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::Collecting
    }
}

impl std::fmt::Display for DialogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Collecting => "collecting",
            Self::Fulfilled => "fulfilled",
        };
        write!(f, "{s}")
    }
}

/// Optional collaborators for the agent.
#[derive(Default, Clone)]
pub struct AgentDeps {
    pub classifier: Option<Arc<dyn SentimentClassifier>>,
    pub synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    pub store: Option<Arc<dyn ObjectStore>>,
}

/// Handles ordering turns.
pub struct OrderAgent {
    config: OrderConfig,
    table: SlotTable,
    advisor: SentimentAdvisor,
    voice: VoiceRenderer,
}

impl OrderAgent {
    /// Create an agent for the pizza order table.
    pub fn new(config: OrderConfig, deps: AgentDeps) -> Self {
        Self::with_table(config, SlotTable::pizza_order(), deps)
    }

    /// Create an agent for a custom slot table.
    pub fn with_table(config: OrderConfig, table: SlotTable, deps: AgentDeps) -> Self {
        let advisor = SentimentAdvisor::new(deps.classifier, config.language.clone());
        let voice = VoiceRenderer::new(deps.synthesizer, deps.store, &config);
        Self {
            config,
            table,
            advisor,
            voice,
        }
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    /// Handle a raw event document and return the response document.
    pub async fn handle_json(&self, event: &Value) -> Value {
        let event = TurnEvent::from_value(event);
        self.handle_turn(&event).await.to_value()
    }

    /// Handle one turn. Always produces a well-formed response.
    pub async fn handle_turn(&self, event: &TurnEvent) -> ComposedResponse {
        let intent = event.intent_name();
        debug!(intent = %intent, "Handling turn");

        if intent == self.config.order_intent {
            self.handle_order(event).await
        } else if intent == self.config.greet_intent {
            ComposedResponse::close(event, WELCOME_MESSAGE, None)
        } else {
            info!(intent = %intent, "Intent not recognized, sending fallback");
            ComposedResponse::close(event, FALLBACK_MESSAGE, None)
        }
    }

    async fn handle_order(&self, event: &TurnEvent) -> ComposedResponse {
        let order = match validate(&self.table, event) {
            TableVerdict::Elicit { slot, message } => {
                info!(slot = %slot, "Eliciting slot");
                return ComposedResponse::elicit(event, slot, message);
            }
            TableVerdict::Complete(order) => order,
        };

        let sentiment = self.advisor.advise(event.transcript()).await;
        let message = confirmation_message(&order, sentiment);
        let audio = self
            .voice
            .render(&message, order.value(names::CUSTOMER_NAME))
            .await;

        info!(
            sentiment = %sentiment,
            audio = audio.is_some(),
            "Order fulfilled"
        );
        ComposedResponse::close(event, message, audio)
    }
}
