//! Top-level calculation entry point.
//!
//! [`solve`] validates the request and the rate table, obtains a gross
//! salary (directly in gross mode, through the iterative solver in net
//! mode), runs the forward pipeline once on it, and packages the result.
//! Monetary values are rounded to 2 decimal places only here, and totals
//! are recomputed from the rounded components so the published invariants
//! hold exactly.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    CalculationResult, EmployeeContributions, EmployerContributions, SalaryInput, SalaryMode,
};

use super::forward::compute_for_gross;
use super::net_solver::solve_gross_from_net;
use super::warnings::collect_warnings;

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the full payroll breakdown for a salary input.
///
/// This is the engine's single public operation: a pure function of the
/// input and the rate table, with no side effects and no shared state.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError) for a
/// malformed input, [`EngineError::InvalidRateTable`](crate::error::EngineError)
/// for a malformed rate table, and
/// [`EngineError::BracketNotFound`](crate::error::EngineError) if the
/// bracket table fails to cover a taxable net despite validation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::solve;
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
/// let result = solve(&input, &rates).unwrap();
/// assert_eq!(result.net_salary, Decimal::from_str("4397.07").unwrap());
/// ```
pub fn solve(input: &SalaryInput, rates: &RateTable) -> EngineResult<CalculationResult> {
    input.validate()?;
    rates.validate()?;

    let gross_salary = match input.salary_mode {
        SalaryMode::Gross => input.base_salary,
        SalaryMode::Net => solve_gross_from_net(input.base_salary, input, rates)?,
    };

    let computation = compute_for_gross(gross_salary, input, rates)?;
    let warnings = collect_warnings(input, rates, &computation)?;

    let gross_salary = round_money(computation.gross_salary);
    let taxable_gross = round_money(computation.taxable_gross);

    let social_security_employee = round_money(computation.social_security.employee);
    let health_employee = round_money(computation.health.employee);
    let pension_employee = round_money(computation.pension.employee);
    let income_tax = round_money(computation.income_tax);
    let taxable_net = (taxable_gross - social_security_employee - health_employee
        - pension_employee)
        .max(Decimal::ZERO);

    let social_security_employer = round_money(computation.social_security.employer);
    let health_employer = round_money(computation.health.employer);
    let pension_employer = round_money(computation.pension.employer);
    let vocational_training_tax = round_money(computation.vocational_training_tax);
    let employer_total = social_security_employer
        + health_employer
        + pension_employer
        + vocational_training_tax;

    Ok(CalculationResult {
        gross_salary,
        total_bonuses_and_benefits: taxable_gross - gross_salary,
        taxable_gross,
        taxable_net,
        net_salary: taxable_net - income_tax,
        employee_contributions: EmployeeContributions {
            social_security: social_security_employee,
            health: health_employee,
            pension: pension_employee,
            income_tax,
            total: social_security_employee + health_employee + pension_employee + income_tax,
        },
        employer_contributions: EmployerContributions {
            social_security: social_security_employer,
            health: health_employer,
            pension: pension_employer,
            vocational_training_tax,
            total: employer_total,
        },
        total_employer_cost: taxable_gross + employer_total,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::MaritalStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input() -> SalaryInput {
        SalaryInput {
            base_salary: dec("5000"),
            salary_mode: SalaryMode::Gross,
            fixed_bonus: Decimal::ZERO,
            exceptional_bonus: Decimal::ZERO,
            benefits_in_kind: Decimal::ZERO,
            seniority_years: 0,
            marital_status: MaritalStatus::Single,
            dependent_children: 0,
            enable_social_security: true,
            enable_health_insurance: true,
            enable_supplementary_pension: false,
            employee_pension_rate: Decimal::ZERO,
            employer_pension_rate: Decimal::ZERO,
            tax_exempt: false,
            exemption_months: 0,
        }
    }

    #[test]
    fn test_gross_mode_5000_breakdown() {
        let rates = RateTable::morocco_2025();
        let result = solve(&create_test_input(), &rates).unwrap();

        assert_eq!(result.gross_salary, dec("5000.00"));
        assert_eq!(result.taxable_gross, dec("5000.00"));
        assert_eq!(result.employee_contributions.social_security, dec("224.00"));
        assert_eq!(result.employee_contributions.health, dec("113.00"));
        assert_eq!(result.taxable_net, dec("4663.00"));
        assert_eq!(result.employee_contributions.income_tax, dec("265.93"));
        assert_eq!(result.net_salary, dec("4397.07"));
        assert_eq!(result.total_employer_cost, dec("5748.50"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_all_monetary_fields_rounded_to_two_places() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.base_salary = dec("3333.33");
        let result = solve(&input, &rates).unwrap();

        for value in [
            result.gross_salary,
            result.taxable_gross,
            result.taxable_net,
            result.net_salary,
            result.employee_contributions.social_security,
            result.employee_contributions.health,
            result.employee_contributions.income_tax,
            result.employee_contributions.total,
            result.employer_contributions.social_security,
            result.employer_contributions.health,
            result.employer_contributions.vocational_training_tax,
            result.employer_contributions.total,
            result.total_employer_cost,
        ] {
            assert!(value.scale() <= 2, "{} has more than 2 decimal places", value);
        }
    }

    #[test]
    fn test_invariants_hold_after_rounding() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.base_salary = dec("7777.77");
        input.seniority_years = 7;
        input.fixed_bonus = dec("123.45");
        let result = solve(&input, &rates).unwrap();

        assert_eq!(
            result.taxable_gross,
            result.gross_salary + result.total_bonuses_and_benefits
        );
        assert_eq!(
            result.total_employer_cost,
            result.taxable_gross + result.employer_contributions.total
        );
        assert_eq!(
            result.net_salary,
            result.taxable_net - result.employee_contributions.income_tax
        );
    }

    #[test]
    fn test_net_mode_packages_solved_gross() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.salary_mode = SalaryMode::Net;
        let result = solve(&input, &rates).unwrap();

        assert!(result.gross_salary > dec("5000"));
        assert!((result.net_salary - dec("5000")).abs() < dec("5"));
    }

    #[test]
    fn test_full_pension_rate_yields_zero_net_not_an_error() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.enable_supplementary_pension = true;
        input.employee_pension_rate = dec("100");

        let result = solve(&input, &rates).unwrap();
        assert_eq!(result.taxable_net, Decimal::ZERO);
        assert_eq!(result.employee_contributions.income_tax, Decimal::ZERO);
        assert_eq!(result.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_input_rejected_before_computation() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.base_salary = dec("-100");

        match solve(&input, &rates).unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_extreme_base_salary_rejected_instead_of_overflowing() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.base_salary = Decimal::MAX;

        match solve(&input, &rates).unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_at_cap_computes_without_overflow() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.base_salary = dec("1000000000");
        input.seniority_years = 50;
        input.fixed_bonus = dec("1000000000");

        let result = solve(&input, &rates).unwrap();
        assert!(result.net_salary > Decimal::ZERO);
        assert!(result.total_employer_cost > result.taxable_gross);
    }

    #[test]
    fn test_malformed_rate_table_rejected() {
        let mut rates = RateTable::morocco_2025();
        rates.income_tax_brackets.remove(2);
        let input = create_test_input();

        match solve(&input, &rates).unwrap_err() {
            EngineError::InvalidRateTable { .. } => {}
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_tax_exempt_result_has_zero_income_tax() {
        let rates = RateTable::morocco_2025();
        let mut input = create_test_input();
        input.base_salary = dec("20000");
        input.tax_exempt = true;
        let result = solve(&input, &rates).unwrap();

        assert_eq!(result.employee_contributions.income_tax, Decimal::ZERO);
        assert_eq!(result.net_salary, result.taxable_net);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let rates = RateTable::morocco_2025();
        let input = create_test_input();
        let first = solve(&input, &rates).unwrap();
        let second = solve(&input, &rates).unwrap();
        assert_eq!(first, second);
    }
}
