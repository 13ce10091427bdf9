//! Ordered slot validation.
//!
//! One loop over the table; the first slot that is missing or invalid stops
//! the walk. Failures are never batched: each turn corrects one slot.

use tracing::debug;

use super::time::normalize_time;
use super::toppings::{ALLOWED_TOPPINGS, ToppingError, parse_toppings};
use super::{SlotDefinition, SlotKind, SlotTable, ValidationOutcome};
use crate::event::TurnEvent;

/// Display values of a fully validated order, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedOrder {
    values: Vec<(String, String)>,
}

impl ValidatedOrder {
    /// Normalized value of a slot. `None` for unknown or skipped optional slots.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, value)| value.as_str())
    }

    /// Same as [`get`](Self::get) but empty for absent slots, for templating.
    pub fn value(&self, slot: &str) -> &str {
        self.get(slot).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Verdict for a whole slot table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableVerdict {
    /// Ask the user for this slot next.
    Elicit { slot: String, message: String },
    /// Every slot validated.
    Complete(ValidatedOrder),
}

/// Walk the table in order and stop at the first missing or invalid slot.
pub fn validate(table: &SlotTable, event: &TurnEvent) -> TableVerdict {
    let mut order = ValidatedOrder::default();

    for def in table.iter() {
        let raw = event.get(&def.name);
        match validate_slot(def, raw.as_deref()) {
            ValidationOutcome::Valid(value) => {
                order.values.push((def.name.clone(), value));
            }
            ValidationOutcome::Missing if !def.required => {
                debug!(slot = %def.name, "Optional slot absent, skipping");
            }
            ValidationOutcome::Missing => {
                debug!(slot = %def.name, "Required slot missing");
                return TableVerdict::Elicit {
                    slot: def.name.clone(),
                    message: def.prompt.clone(),
                };
            }
            ValidationOutcome::Invalid { reason, message } => {
                debug!(slot = %def.name, reason = %reason, "Slot value rejected");
                return TableVerdict::Elicit {
                    slot: def.name.clone(),
                    message,
                };
            }
        }
    }

    TableVerdict::Complete(order)
}

/// Check one slot value against its definition.
///
/// `raw` is the already-trimmed value from the event, `None` when absent.
pub fn validate_slot(def: &SlotDefinition, raw: Option<&str>) -> ValidationOutcome {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return ValidationOutcome::Missing;
    };

    match &def.kind {
        SlotKind::FreeText => ValidationOutcome::Valid(raw.to_string()),
        SlotKind::Enumerated(allowed) => {
            match allowed.iter().find(|a| a.eq_ignore_ascii_case(raw)) {
                Some(member) => ValidationOutcome::Valid(member.clone()),
                None => ValidationOutcome::Invalid {
                    reason: format!("{raw:?} is not an allowed {}", def.label),
                    message: format!(
                        "Sorry, {raw} isn't a {} we offer. Please choose one of: {}.",
                        def.label,
                        allowed.join(", ")
                    ),
                },
            }
        }
        SlotKind::Toppings => match parse_toppings(raw) {
            Ok(toppings) => ValidationOutcome::Valid(toppings.display()),
            Err(ToppingError::Empty) => ValidationOutcome::Missing,
            Err(ToppingError::Unknown(unknown)) => ValidationOutcome::Invalid {
                reason: format!("unknown toppings: {}", unknown.join(", ")),
                message: format!(
                    "Sorry, we don't have {}. Available toppings are: {}.",
                    unknown.join(", "),
                    ALLOWED_TOPPINGS.join(", ")
                ),
            },
        },
        SlotKind::TimeExpression => ValidationOutcome::Valid(normalize_time(raw)),
    }
}
