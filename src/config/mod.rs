//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides the statutory rate table: contribution rates,
//! the progressive income tax bracket table, and family allowance
//! constants. The built-in Morocco 2025 table is available through
//! [`RateTable::morocco_2025`]; alternate tables (for example a future
//! tax year) can be loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::RateTable;
//!
//! let rates = RateTable::from_yaml_file("./config/morocco_2025.yaml").unwrap();
//! println!("Loaded rate table: {}", rates.metadata.name);
//! ```

mod loader;
mod types;

pub use types::{ContributionRate, FamilyAllowance, RateTable, RateTableMetadata, TaxBracket};
