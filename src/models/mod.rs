//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod salary_input;

pub use calculation_result::{CalculationResult, EmployeeContributions, EmployerContributions};
pub use salary_input::{MaritalStatus, SalaryInput, SalaryMode};
