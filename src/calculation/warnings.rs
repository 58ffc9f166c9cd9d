//! Advisory warning generation.
//!
//! Warnings are purely informational and never block a calculation. Two
//! conditions are checked: an exceptional bonus that pushes the employee
//! into a higher tax bracket, and employer overhead above a threshold
//! share of the taxable gross.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::SalaryInput;

use super::forward::{GrossComputation, compute_for_gross};
use super::income_tax::find_bracket;

/// Returns the employer-overhead share of taxable gross above which a
/// warning is emitted (22%).
pub fn employer_overhead_warning_ratio() -> Decimal {
    Decimal::new(22, 2)
}

fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

/// Collects the advisory warnings for a finished computation.
///
/// # Errors
///
/// Propagates bracket-lookup failures from the what-if recomputation;
/// with a validated rate table this cannot occur for non-negative inputs.
pub fn collect_warnings(
    input: &SalaryInput,
    rates: &RateTable,
    computation: &GrossComputation,
) -> EngineResult<Vec<String>> {
    let mut warnings = Vec::new();

    if input.exceptional_bonus > Decimal::ZERO && !input.tax_exempt {
        let mut without_bonus = input.clone();
        without_bonus.exceptional_bonus = Decimal::ZERO;
        let baseline = compute_for_gross(computation.gross_salary, &without_bonus, rates)?;

        let bracket_with = find_bracket(computation.taxable_net, &rates.income_tax_brackets)?;
        let bracket_without = find_bracket(baseline.taxable_net, &rates.income_tax_brackets)?;

        if bracket_without.rate < bracket_with.rate {
            warnings.push(format!(
                "The exceptional bonus moves taxable income from the {}% bracket into the {}% bracket; part of the bonus is taxed at the higher rate",
                percent(bracket_without.rate),
                percent(bracket_with.rate),
            ));
        }
    }

    if computation.taxable_gross > Decimal::ZERO {
        let overhead = (computation.total_employer_cost - computation.taxable_gross)
            / computation.taxable_gross;
        if overhead > employer_overhead_warning_ratio() {
            warnings.push(format!(
                "Employer contributions amount to {}% of taxable gross, above the {}% threshold; consider shifting part of the package to non-taxable benefits",
                percent(overhead).round_dp(1),
                percent(employer_overhead_warning_ratio()),
            ));
        }
    }

    Ok(warnings)
}
