//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the calculation functions for producing a
//! payroll breakdown: seniority bonus accrual, ceiling-capped social
//! contributions, supplementary pension amounts, progressive income tax
//! with family deductions, the closed-form gross-to-net pipeline, the
//! iterative net-to-gross solver, and advisory warnings.

mod contributions;
mod forward;
mod income_tax;
mod net_solver;
mod seniority;
mod solve;
mod warnings;

pub use contributions::{ContributionAmounts, contribution_amounts, pension_amounts};
pub use forward::{GrossComputation, compute_for_gross};
pub use income_tax::{compute_income_tax, find_bracket, monthly_family_deduction};
pub use net_solver::{
    MAX_GROSS_FROM_NET_ITERATIONS, damping_factor, net_tolerance, seed_deduction_rate,
    solve_gross_from_net,
};
pub use seniority::{
    SENIORITY_MIN_YEARS, compute_seniority_bonus, seniority_accrual_per_year, seniority_cap,
};
pub use solve::solve;
pub use warnings::{collect_warnings, employer_overhead_warning_ratio};
