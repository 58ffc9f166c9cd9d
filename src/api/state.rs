//! Application state for the Payroll Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateTable;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// process-wide rate table, loaded once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// The statutory rate table.
    rates: Arc<RateTable>,
}

impl AppState {
    /// Creates a new application state with the given rate table.
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
