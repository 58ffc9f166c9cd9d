//! Calculation result models for the Payroll Calculation Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! contribution breakdown structures. A result is fully derived from a
//! [`SalaryInput`](super::SalaryInput) and a rate table; it carries no
//! identity and is recomputed fresh on every request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly amounts withheld from the employee's salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeContributions {
    /// CNSS social security contribution (ceiling-capped base).
    pub social_security: Decimal,
    /// AMO health insurance contribution.
    pub health: Decimal,
    /// CIMR supplementary pension contribution.
    pub pension: Decimal,
    /// Income tax (IR) withheld after family deductions.
    pub income_tax: Decimal,
    /// Sum of all employee-side amounts.
    pub total: Decimal,
}

/// Monthly amounts owed by the employer on top of the gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// CNSS social security contribution (ceiling-capped base).
    pub social_security: Decimal,
    /// AMO health insurance contribution.
    pub health: Decimal,
    /// CIMR supplementary pension contribution.
    pub pension: Decimal,
    /// Vocational training tax (taxe de formation professionnelle).
    pub vocational_training_tax: Decimal,
    /// Sum of all employer-side amounts.
    pub total: Decimal,
}

/// The complete result of a payroll calculation.
///
/// All monetary fields are rounded to 2 decimal places; totals are computed
/// from the rounded components so that
/// `taxable_gross = gross_salary + total_bonuses_and_benefits` and
/// `total_employer_cost = taxable_gross + employer_contributions.total`
/// hold exactly.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CalculationResult, EmployeeContributions, EmployerContributions};
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     gross_salary: Decimal::new(500000, 2),
///     total_bonuses_and_benefits: Decimal::ZERO,
///     taxable_gross: Decimal::new(500000, 2),
///     taxable_net: Decimal::new(466300, 2),
///     net_salary: Decimal::new(439707, 2),
///     employee_contributions: EmployeeContributions {
///         social_security: Decimal::new(22400, 2),
///         health: Decimal::new(11300, 2),
///         pension: Decimal::ZERO,
///         income_tax: Decimal::new(26593, 2),
///         total: Decimal::new(60293, 2),
///     },
///     employer_contributions: EmployerContributions {
///         social_security: Decimal::new(44900, 2),
///         health: Decimal::new(20550, 2),
///         pension: Decimal::ZERO,
///         vocational_training_tax: Decimal::new(9400, 2),
///         total: Decimal::new(74850, 2),
///     },
///     total_employer_cost: Decimal::new(574850, 2),
///     warnings: vec![],
/// };
/// assert_eq!(
///     result.taxable_gross + result.employer_contributions.total,
///     result.total_employer_cost,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The base gross salary (given in gross mode, solved in net mode).
    pub gross_salary: Decimal,
    /// Seniority bonus plus all taxable bonuses and benefits in kind.
    pub total_bonuses_and_benefits: Decimal,
    /// Gross salary plus all bonuses and benefits, before any deduction.
    pub taxable_gross: Decimal,
    /// Taxable gross minus employee social deductions, the IR base.
    pub taxable_net: Decimal,
    /// Amount actually paid to the employee.
    pub net_salary: Decimal,
    /// Amounts withheld from the employee.
    pub employee_contributions: EmployeeContributions,
    /// Amounts owed by the employer.
    pub employer_contributions: EmployerContributions,
    /// Taxable gross plus all employer contributions.
    pub total_employer_cost: Decimal,
    /// Advisory messages; never block the calculation.
    pub warnings: Vec<String>,
}
