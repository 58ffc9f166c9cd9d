//! Social contribution calculation functionality.
//!
//! This module computes the employee and employer amounts for the CNSS,
//! AMO, and CIMR schemes. CNSS applies its rates to a ceiling-capped
//! base; AMO has no ceiling; CIMR rates come from the request itself
//! since they are contractual rather than statutory.

use rust_decimal::Decimal;

use crate::config::ContributionRate;
use crate::models::SalaryInput;

/// Employee and employer amounts for one contribution scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionAmounts {
    /// Amount withheld from the employee.
    pub employee: Decimal,
    /// Amount owed by the employer.
    pub employer: Decimal,
}

impl ContributionAmounts {
    /// A zeroed pair, used when a scheme is disabled.
    pub fn zero() -> Self {
        Self {
            employee: Decimal::ZERO,
            employer: Decimal::ZERO,
        }
    }
}

/// Computes the amounts for a statutory contribution scheme.
///
/// The contribution base is the taxable gross, capped at the scheme's
/// ceiling when one is configured. A disabled scheme contributes exactly
/// zero on both sides.
pub fn contribution_amounts(
    taxable_gross: Decimal,
    rates: &ContributionRate,
    enabled: bool,
) -> ContributionAmounts {
    if !enabled {
        return ContributionAmounts::zero();
    }

    let base = match rates.ceiling {
        Some(ceiling) => taxable_gross.min(ceiling),
        None => taxable_gross,
    };

    ContributionAmounts {
        employee: base * rates.employee,
        employer: base * rates.employer,
    }
}

/// Computes the CIMR supplementary pension amounts.
///
/// The employee and employer rates are given on the input as percentages
/// (0-100) and apply to the full taxable gross with no ceiling. When the
/// scheme is not enabled both amounts are exactly zero.
pub fn pension_amounts(taxable_gross: Decimal, input: &SalaryInput) -> ContributionAmounts {
    if !input.enable_supplementary_pension {
        return ContributionAmounts::zero();
    }

    ContributionAmounts {
        employee: taxable_gross * input.employee_pension_rate / Decimal::ONE_HUNDRED,
        employer: taxable_gross * input.employer_pension_rate / Decimal::ONE_HUNDRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MaritalStatus, SalaryMode};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn cnss_rates() -> ContributionRate {
        ContributionRate {
            employee: dec("0.0448"),
            employer: dec("0.0898"),
            ceiling: Some(dec("6000")),
        }
    }

    fn amo_rates() -> ContributionRate {
        ContributionRate {
            employee: dec("0.0226"),
            employer: dec("0.0411"),
            ceiling: None,
        }
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
    fn test_cnss_below_ceiling() {
        let amounts = contribution_amounts(dec("5000"), &cnss_rates(), true);
        assert_eq!(amounts.employee, dec("224.0000"));
        assert_eq!(amounts.employer, dec("449.0000"));
    }

    #[test]
    fn test_cnss_base_capped_at_ceiling() {
        let amounts = contribution_amounts(dec("10000"), &cnss_rates(), true);
        assert_eq!(amounts.employee, dec("268.8000"));
        assert_eq!(amounts.employer, dec("538.8000"));
    }

    #[test]
    fn test_amo_has_no_ceiling() {
        let amounts = contribution_amounts(dec("10000"), &amo_rates(), true);
        assert_eq!(amounts.employee, dec("226.0000"));
        assert_eq!(amounts.employer, dec("411.0000"));
    }

    #[test]
    fn test_disabled_scheme_is_exactly_zero() {
        let amounts = contribution_amounts(dec("10000"), &cnss_rates(), false);
        assert_eq!(amounts.employee, Decimal::ZERO);
        assert_eq!(amounts.employer, Decimal::ZERO);
    }

    #[test]
    fn test_pension_disabled_is_zero_even_with_rates() {
        let mut input = create_test_input();
        input.employee_pension_rate = dec("3");
        input.employer_pension_rate = dec("4.5");

        let amounts = pension_amounts(dec("10000"), &input);
        assert_eq!(amounts, ContributionAmounts::zero());
    }

    #[test]
    fn test_pension_applies_percent_rates_without_ceiling() {
        let mut input = create_test_input();
        input.enable_supplementary_pension = true;
        input.employee_pension_rate = dec("3");
        input.employer_pension_rate = dec("4.5");

        let amounts = pension_amounts(dec("10000"), &input);
        assert_eq!(amounts.employee, dec("300"));
        assert_eq!(amounts.employer, dec("450.0"));
    }
}
