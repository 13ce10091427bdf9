//! Slot definitions and the order slot table.
//!
//! A [`SlotTable`] is an ordered list of [`SlotDefinition`]s. Declaration
//! order is elicitation order: the validator always reports the first slot
//! that is missing or invalid.

pub mod time;
pub mod toppings;
pub mod validator;

pub use time::normalize_time;
pub use toppings::{ALLOWED_TOPPINGS, ToppingError, Toppings, parse_toppings};
pub use validator::{TableVerdict, ValidatedOrder, validate, validate_slot};

/// Slot names used by the pizza ordering intent.
pub mod names {
    pub const KIND: &str = "pizzatype";
    pub const SIZE: &str = "pizzasize";
    pub const CRUST: &str = "crusttype";
    pub const TOPPINGS: &str = "toppings";
    pub const CUSTOMER_NAME: &str = "Customer-Name";
    pub const CONTACT: &str = "Contact-Info";
    pub const TIME: &str = "Order-Time";
}

/// How a slot's value is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind {
    /// Must match one of the listed values (case-insensitive).
    Enumerated(Vec<String>),
    /// Any non-empty text.
    FreeText,
    /// Comma-delimited toppings list.
    Toppings,
    /// Requested time; normalized, never rejected.
    TimeExpression,
}

/// One slot the dialog collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDefinition {
    /// Slot name as it appears in the event.
    pub name: String,
    /// Human-readable label used in corrective messages.
    pub label: String,
    pub required: bool,
    pub kind: SlotKind,
    /// Prompt used when the slot is missing.
    pub prompt: String,
}

impl SlotDefinition {
    /// A required slot.
    pub fn required(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: SlotKind,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: true,
            kind,
            prompt: prompt.into(),
        }
    }

    /// Mark the slot optional: absence is accepted.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Result of checking a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Accepted; carries the normalized display value.
    Valid(String),
    /// No usable value was supplied.
    Missing,
    /// A value was supplied but cannot be accepted.
    Invalid { reason: String, message: String },
}

/// Ordered slot definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    slots: Vec<SlotDefinition>,
}

impl SlotTable {
    pub fn new(slots: Vec<SlotDefinition>) -> Self {
        Self { slots }
    }

    /// The pizza order: kind, size, crust, toppings, name, contact, time.
    pub fn pizza_order() -> Self {
        Self::new(vec![
            SlotDefinition::required(
                names::KIND,
                "pizza type",
                SlotKind::FreeText,
                "What type of pizza would you like?",
            ),
            SlotDefinition::required(
                names::SIZE,
                "size",
                enumerated(&["Small", "Medium", "Large"]),
                "What size pizza would you like? (Small, Medium, Large)",
            ),
            SlotDefinition::required(
                names::CRUST,
                "crust",
                enumerated(&["Thin", "Thick", "Regular", "Stuffed"]),
                "What type of crust would you like? (Thin, Thick, Regular, Stuffed)",
            ),
            SlotDefinition::required(
                names::TOPPINGS,
                "toppings",
                SlotKind::Toppings,
                "What toppings would you like?",
            ),
            SlotDefinition::required(
                names::CUSTOMER_NAME,
                "name",
                SlotKind::FreeText,
                "Can I have your name, please?",
            ),
            SlotDefinition::required(
                names::CONTACT,
                "contact information",
                SlotKind::FreeText,
                "Please provide your contact information.",
            ),
            SlotDefinition::required(
                names::TIME,
                "time",
                SlotKind::TimeExpression,
                "When would you like your pizza to be delivered or ready for pickup? \
                 You can say something like '5PM' or 'tomorrow at noon'.",
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotDefinition> {
        self.slots.iter()
    }

    pub fn get(&self, name: &str) -> Option<&SlotDefinition> {
        self.slots.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn enumerated(values: &[&str]) -> SlotKind {
    SlotKind::Enumerated(values.iter().map(|v| v.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pizza_order_declares_slots_in_elicitation_order() {
        let table = SlotTable::pizza_order();
        let order: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            order,
            [
                names::KIND,
                names::SIZE,
                names::CRUST,
                names::TOPPINGS,
                names::CUSTOMER_NAME,
                names::CONTACT,
                names::TIME,
            ]
        );
        assert!(table.iter().all(|s| s.required));
    }

    #[test]
    fn optional_builder_clears_required() {
        let slot = SlotDefinition::required("notes", "notes", SlotKind::FreeText, "Any notes?")
            .optional();
        assert!(!slot.required);
    }

    #[test]
    fn lookup_by_name() {
        let table = SlotTable::pizza_order();
        assert!(matches!(
            table.get(names::SIZE).map(|s| &s.kind),
            Some(SlotKind::Enumerated(_))
        ));
        assert!(table.get("drink").is_none());
        assert_eq!(table.len(), 7);
    }
}
