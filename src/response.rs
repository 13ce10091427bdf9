//! Response composition.
//!
//! A turn ends in exactly one of two shapes: elicit the next slot, or close
//! the intent as fulfilled. Both echo the slot map as received so the
//! front-end keeps every value already collected.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dialog::DialogState;
use crate::enrichment::SentimentVerdict;
use crate::event::TurnEvent;
use crate::slots::ValidatedOrder;
use crate::slots::names;

/// Content type of every outgoing message.
pub const PLAIN_TEXT: &str = "PlainText";

/// Outcome of one turn.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposedResponse {
    /// Ask for (or correct) one slot.
    ElicitSlot {
        intent_name: String,
        slot: String,
        message: String,
        slots: Value,
        session_attributes: Option<Map<String, Value>>,
    },
    /// Close the intent as fulfilled.
    CloseFulfilled {
        intent_name: String,
        message: String,
        audio: Option<String>,
        slots: Value,
        session_attributes: Option<Map<String, Value>>,
    },
}

impl ComposedResponse {
    /// Elicit `slot` with `message`, echoing the event's slot map.
    pub fn elicit(event: &TurnEvent, slot: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ElicitSlot {
            intent_name: event.intent_name().to_string(),
            slot: slot.into(),
            message: message.into(),
            slots: event.slots().clone(),
            session_attributes: event.session_attributes().cloned(),
        }
    }

    /// Close as fulfilled. An audio reference adds a second message entry.
    pub fn close(event: &TurnEvent, message: impl Into<String>, audio: Option<String>) -> Self {
        Self::CloseFulfilled {
            intent_name: event.intent_name().to_string(),
            message: message.into(),
            audio,
            slots: event.slots().clone(),
            session_attributes: event.session_attributes().cloned(),
        }
    }

    /// Dialog state this response leaves the intent in.
    pub fn state(&self) -> DialogState {
        match self {
            Self::ElicitSlot { .. } => DialogState::Collecting,
            Self::CloseFulfilled { .. } => DialogState::Fulfilled,
        }
    }

    /// Slot being elicited, if any.
    pub fn slot_to_elicit(&self) -> Option<&str> {
        match self {
            Self::ElicitSlot { slot, .. } => Some(slot),
            Self::CloseFulfilled { .. } => None,
        }
    }

    /// Outgoing message entries, in order.
    pub fn messages(&self) -> Vec<OutgoingMessage> {
        match self {
            Self::ElicitSlot { message, .. } => vec![OutgoingMessage::plain(message)],
            Self::CloseFulfilled { message, audio, .. } => {
                let mut messages = vec![OutgoingMessage::plain(message)];
                if let Some(reference) = audio {
                    messages.push(OutgoingMessage::plain(format!(
                        "You can listen to your order confirmation here: {reference}"
                    )));
                }
                messages
            }
        }
    }

    /// Serialize into the front-end's response document.
    pub fn to_value(&self) -> Value {
        let (intent_name, slots, session_attributes, dialog_action) = match self {
            Self::ElicitSlot {
                intent_name,
                slot,
                slots,
                session_attributes,
                ..
            } => (
                intent_name,
                slots,
                session_attributes,
                DialogAction::ElicitSlot {
                    slot_to_elicit: slot.clone(),
                },
            ),
            Self::CloseFulfilled {
                intent_name,
                slots,
                session_attributes,
                ..
            } => (
                intent_name,
                slots,
                session_attributes,
                DialogAction::Close {
                    fulfillment_state: "Fulfilled",
                },
            ),
        };

        let wire = WireResponse {
            session_state: WireSessionState {
                dialog_action,
                intent: WireIntent {
                    name: intent_name,
                    slots,
                    state: self.state().intent_state(),
                },
                session_attributes: session_attributes.as_ref(),
            },
            messages: self.messages(),
        };
        // Every field is a string, map or plain enum; serialization cannot fail.
        serde_json::to_value(wire).unwrap_or(Value::Null)
    }
}

/// One entry in the `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    #[serde(rename = "contentType")]
    pub content_type: &'static str,
    pub content: String,
}

impl OutgoingMessage {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: PLAIN_TEXT,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse<'a> {
    session_state: WireSessionState<'a>,
    messages: Vec<OutgoingMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireSessionState<'a> {
    dialog_action: DialogAction,
    intent: WireIntent<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_attributes: Option<&'a Map<String, Value>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum DialogAction {
    ElicitSlot {
        #[serde(rename = "slotToElicit")]
        slot_to_elicit: String,
    },
    Close {
        #[serde(rename = "fulfillmentState")]
        fulfillment_state: &'static str,
    },
}

#[derive(Serialize)]
struct WireIntent<'a> {
    name: &'a str,
    slots: &'a Value,
    state: &'static str,
}

/// Confirmation text for a fully validated order.
///
/// A negative customer gets a warmer message without the time and contact
/// recap; everyone else gets the full recap.
pub fn confirmation_message(order: &ValidatedOrder, sentiment: SentimentVerdict) -> String {
    let name = order.value(names::CUSTOMER_NAME);
    let size = order.value(names::SIZE);
    let kind = order.value(names::KIND);
    let crust = order.value(names::CRUST);
    let toppings = order.value(names::TOPPINGS);

    if sentiment == SentimentVerdict::Negative {
        return format!(
            "Thank you {name}. Sorry you're not feeling great. \
             Enjoy your {size} {kind} pizza with {crust} crust and {toppings}!"
        );
    }

    let time = order.value(names::TIME);
    let contact = order.value(names::CONTACT);
    format!(
        "Thank you {name}! Your {size} {kind} pizza with {crust} crust and {toppings} \
         will be ready at {time}. We'll contact you at {contact}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::event::tests::order_event;
    use crate::slots::{SlotTable, TableVerdict, validate};

    fn full_event() -> TurnEvent {
        TurnEvent::from_value(&order_event(&[
            (names::KIND, "Margherita"),
            (names::SIZE, "Large"),
            (names::CRUST, "Thin"),
            (names::TOPPINGS, "cheese,olives"),
            (names::CUSTOMER_NAME, "Sam"),
            (names::CONTACT, "555-0100"),
            (names::TIME, "6PM"),
        ]))
    }

    fn validated(event: &TurnEvent) -> ValidatedOrder {
        match validate(&SlotTable::pizza_order(), event) {
            TableVerdict::Complete(order) => order,
            other => panic!("Expected Complete, got {:?}", other),
        }
    }

    #[test]
    fn standard_confirmation_recaps_time_and_contact() {
        let order = validated(&full_event());
        for sentiment in [
            SentimentVerdict::Positive,
            SentimentVerdict::Neutral,
            SentimentVerdict::Mixed,
            SentimentVerdict::Unknown,
        ] {
            assert_eq!(
                confirmation_message(&order, sentiment),
                "Thank you Sam! Your Large Margherita pizza with Thin crust and Cheese, Olives \
                 will be ready at 18:00. We'll contact you at 555-0100."
            );
        }
    }

    #[test]
    fn negative_confirmation_is_empathetic_and_short() {
        let order = validated(&full_event());
        let message = confirmation_message(&order, SentimentVerdict::Negative);
        assert!(message.contains("Sorry you're not feeling great"));
        assert!(!message.contains("18:00"));
        assert!(!message.contains("555-0100"));
    }

    #[test]
    fn elicit_wire_shape() {
        let event = full_event();
        let response = ComposedResponse::elicit(&event, names::SIZE, "What size?");
        assert_eq!(response.state(), DialogState::Collecting);
        assert_eq!(response.slot_to_elicit(), Some(names::SIZE));

        let value = response.to_value();
        assert_eq!(
            value["sessionState"]["dialogAction"],
            json!({ "type": "ElicitSlot", "slotToElicit": "pizzasize" })
        );
        assert_eq!(value["sessionState"]["intent"]["state"], "InProgress");
        assert_eq!(value["sessionState"]["intent"]["name"], "OrderingPizza");
        assert_eq!(&value["sessionState"]["intent"]["slots"], event.slots());
        assert_eq!(
            value["messages"],
            json!([{ "contentType": "PlainText", "content": "What size?" }])
        );
    }

    #[test]
    fn close_without_audio_has_one_message() {
        let event = full_event();
        let value = ComposedResponse::close(&event, "Done", None).to_value();
        assert_eq!(
            value["sessionState"]["dialogAction"],
            json!({ "type": "Close", "fulfillmentState": "Fulfilled" })
        );
        assert_eq!(value["sessionState"]["intent"]["state"], "Fulfilled");
        assert_eq!(value["messages"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn close_with_audio_appends_reference() {
        let event = full_event();
        let response =
            ComposedResponse::close(&event, "Done", Some("https://audio/x.mp3".into()));
        let messages = response.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "Done");
        assert!(messages[1].content.ends_with("https://audio/x.mp3"));
    }

    #[test]
    fn session_attributes_echoed_only_when_present() {
        let with = TurnEvent::from_value(&json!({
            "sessionState": {
                "intent": { "name": "OrderingPizza", "slots": {} },
                "sessionAttributes": { "store": "north" }
            }
        }));
        let value = ComposedResponse::elicit(&with, names::KIND, "?").to_value();
        assert_eq!(value["sessionState"]["sessionAttributes"]["store"], "north");

        let without = TurnEvent::from_value(&json!({}));
        let value = ComposedResponse::elicit(&without, names::KIND, "?").to_value();
        assert!(value["sessionState"].get("sessionAttributes").is_none());
        assert!(value["sessionState"]["intent"]["slots"].is_null());
    }
}
