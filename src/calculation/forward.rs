//! Closed-form gross-to-net calculation pipeline.
//!
//! Given a gross salary, every other figure of the payroll breakdown
//! follows directly: seniority bonus, taxable gross, contribution
//! amounts, taxable net, income tax, net salary, and employer cost.
//! This is the forward direction used once in gross mode and repeatedly
//! by the net-to-gross solver; all values stay unrounded here so the
//! solver does not compound rounding error across iterations.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::SalaryInput;

use super::contributions::{ContributionAmounts, contribution_amounts, pension_amounts};
use super::income_tax::compute_income_tax;
use super::seniority::compute_seniority_bonus;

/// The unrounded outcome of the forward pipeline for one gross salary.
#[derive(Debug, Clone)]
pub struct GrossComputation {
    /// The gross salary the pipeline ran on.
    pub gross_salary: Decimal,
    /// Seniority bonus derived from the gross salary.
    pub seniority_bonus: Decimal,
    /// Gross plus seniority bonus plus all taxable bonuses and benefits.
    pub taxable_gross: Decimal,
    /// CNSS social security amounts.
    pub social_security: ContributionAmounts,
    /// AMO health insurance amounts.
    pub health: ContributionAmounts,
    /// CIMR supplementary pension amounts.
    pub pension: ContributionAmounts,
    /// Taxable gross minus employee social deductions.
    pub taxable_net: Decimal,
    /// Income tax owed on the taxable net.
    pub income_tax: Decimal,
    /// Taxable net minus income tax.
    pub net_salary: Decimal,
    /// Employer-only vocational training tax.
    pub vocational_training_tax: Decimal,
    /// Taxable gross plus all employer-side amounts.
    pub total_employer_cost: Decimal,
}

/// Runs the full forward pipeline for a gross salary.
///
/// # Errors
///
/// Returns [`EngineError::BracketNotFound`](crate::error::EngineError)
/// when the rate table's brackets do not cover the resulting taxable net.
pub fn compute_for_gross(
    gross_salary: Decimal,
    input: &SalaryInput,
    rates: &RateTable,
) -> EngineResult<GrossComputation> {
    let seniority_bonus = compute_seniority_bonus(gross_salary, input.seniority_years);
    let taxable_gross = gross_salary
        + seniority_bonus
        + input.fixed_bonus
        + input.exceptional_bonus
        + input.benefits_in_kind;

    let social_security = contribution_amounts(
        taxable_gross,
        &rates.social_security,
        input.enable_social_security,
    );
    let health = contribution_amounts(
        taxable_gross,
        &rates.health_insurance,
        input.enable_health_insurance,
    );
    let pension = pension_amounts(taxable_gross, input);

    // Pension rates are caller-supplied; combined employee deductions can
    // exceed the taxable gross. The IR base never goes below zero.
    let taxable_net = (taxable_gross - social_security.employee - health.employee
        - pension.employee)
        .max(Decimal::ZERO);
    let income_tax = compute_income_tax(taxable_net, input, rates)?;
    let net_salary = taxable_net - income_tax;

    let vocational_training_tax = taxable_gross * rates.vocational_training_rate;
    let total_employer_cost = taxable_gross
        + social_security.employer
        + health.employer
        + pension.employer
        + vocational_training_tax;

    Ok(GrossComputation {
        gross_salary,
        seniority_bonus,
        taxable_gross,
        social_security,
        health,
        pension,
        taxable_net,
        income_tax,
        net_salary,
        vocational_training_tax,
        total_employer_cost,
    })
}
