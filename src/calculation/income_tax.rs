//! Progressive income tax (IR) calculation functionality.
//!
//! The IR applies to the monthly taxable net through a bracket table.
//! Each bracket carries a marginal rate and an `amount_to_deduct`
//! constant chosen so that the tax function stays continuous across
//! bracket boundaries. Family deductions (spouse and dependent
//! children) are subtracted from the tax owed, never below zero.

use rust_decimal::Decimal;

use crate::config::{FamilyAllowance, RateTable, TaxBracket};
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryInput;

fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// Finds the bracket covering a taxable net amount.
///
/// Brackets are selected on the half-open interval `[min, max)`; the last
/// bracket has no upper bound.
///
/// # Errors
///
/// Returns [`EngineError::BracketNotFound`] when no bracket covers the
/// amount, which can only happen with a malformed bracket table or a
/// negative taxable net.
pub fn find_bracket(taxable_net: Decimal, brackets: &[TaxBracket]) -> EngineResult<&TaxBracket> {
    brackets
        .iter()
        .find(|bracket| bracket.contains(taxable_net))
        .ok_or(EngineError::BracketNotFound { taxable_net })
}

/// Computes the monthly family deduction for an input.
///
/// The statutory constants are annual; the monthly deduction is their
/// twelfth. The number of dependent children is capped at
/// `allowance.max_children`.
pub fn monthly_family_deduction(input: &SalaryInput, allowance: &FamilyAllowance) -> Decimal {
    let spouse = if input.marital_status.is_married() {
        allowance.married_annual_deduction / months_per_year()
    } else {
        Decimal::ZERO
    };

    let counted_children = input.dependent_children.min(allowance.max_children);
    let children = Decimal::from(counted_children) * allowance.per_child_annual_deduction
        / months_per_year();

    spouse + children
}

/// Computes the monthly income tax for a taxable net amount.
///
/// Selects the bracket covering `taxable_net` and applies
/// `taxable_net x rate - amount_to_deduct - family_deduction`, clamped
/// to zero. A tax-exempt input owes exactly zero regardless of bracket.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_income_tax;
/// use payroll_engine::config::RateTable;
/// use payroll_engine::models::{MaritalStatus, SalaryInput, SalaryMode};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable::morocco_2025();
/// let input = SalaryInput {
///     base_salary: Decimal::from(5000),
///     salary_mode: SalaryMode::Gross,
///     fixed_bonus: Decimal::ZERO,
///     exceptional_bonus: Decimal::ZERO,
///     benefits_in_kind: Decimal::ZERO,
///     seniority_years: 0,
///     marital_status: MaritalStatus::Single,
///     dependent_children: 0,
///     enable_social_security: true,
///     enable_health_insurance: true,
///     enable_supplementary_pension: false,
///     employee_pension_rate: Decimal::ZERO,
///     employer_pension_rate: Decimal::ZERO,
///     tax_exempt: false,
///     exemption_months: 0,
/// };
///
/// // 4663 falls in the 20% bracket: 4663 x 0.20 - 666.67 = 265.93
/// let tax = compute_income_tax(Decimal::from_str("4663").unwrap(), &input, &rates).unwrap();
/// assert_eq!(tax, Decimal::from_str("265.93").unwrap());
/// ```
pub fn compute_income_tax(
    taxable_net: Decimal,
    input: &SalaryInput,
    rates: &RateTable,
) -> EngineResult<Decimal> {
    if input.tax_exempt {
        return Ok(Decimal::ZERO);
    }

    let bracket = find_bracket(taxable_net, &rates.income_tax_brackets)?;
    let family_deduction = monthly_family_deduction(input, &rates.family_allowance);

    let tax = taxable_net * bracket.rate - bracket.amount_to_deduct - family_deduction;
    Ok(tax.max(Decimal::ZERO))
}
