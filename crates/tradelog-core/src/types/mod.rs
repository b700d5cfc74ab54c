//! Core data types for the trade journal.

mod journal;
mod mode;

pub use journal::{Journal, RiskSettings};
pub use mode::TradeMode;
