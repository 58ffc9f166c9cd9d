//! Payroll Calculation Engine for Moroccan salaries.
//!
//! This crate computes full monthly payroll breakdowns under the Moroccan
//! statutory scheme: CNSS social security, AMO health insurance, optional CIMR
//! supplementary pension, progressive income tax (IR) with family deductions,
//! seniority bonuses, and employer-side costs including the vocational
//! training tax. It supports both gross-to-net calculation and the iterative
//! net-to-gross inversion used by salary simulators.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
