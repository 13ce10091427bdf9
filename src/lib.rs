//! Order Assist: fulfillment logic for a slot-filling ordering bot.

pub mod config;
pub mod dialog;
pub mod enrichment;
pub mod error;
pub mod event;
pub mod response;
pub mod slots;

pub use dialog::{AgentDeps, DialogState, OrderAgent};
pub use event::TurnEvent;
pub use response::ComposedResponse;
