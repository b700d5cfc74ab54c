//! Core types and errors for the trade journal.
//!
//! This crate provides the foundational building blocks including:
//! - Trade modes and entry parsing (percent returns, risk-reward multiples)
//! - The journal record shared by the store, the statistics engine and the UI
//! - The error hierarchy used across the workspace

pub mod error;
pub mod types;

pub use error::{InputError, JournalError, JournalResult, StatsError, StoreError};
pub use types::*;
