//! Seniority bonus calculation functionality.
//!
//! Moroccan labour law grants a seniority bonus as a percentage of the
//! gross salary, accruing per completed year of service up to a cap.

use rust_decimal::Decimal;

/// Minimum completed years of service before the bonus accrues.
pub const SENIORITY_MIN_YEARS: u32 = 2;

/// Returns the accrual rate per year of seniority (0.5%).
pub fn seniority_accrual_per_year() -> Decimal {
    Decimal::new(5, 3)
}

/// Returns the cap on the seniority rate (20%).
pub fn seniority_cap() -> Decimal {
    Decimal::new(20, 2)
}

/// Computes the monthly seniority bonus for a gross salary.
///
/// Below [`SENIORITY_MIN_YEARS`] of service the bonus is zero. From then
/// on the bonus is `gross_salary x min(years x 0.5%, 20%)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_seniority_bonus;
/// use rust_decimal::Decimal;
///
/// // 4 years of service on a 5000 gross: 5000 x 2% = 100
/// let bonus = compute_seniority_bonus(Decimal::from(5000), 4);
/// assert_eq!(bonus, Decimal::from(100));
/// ```
pub fn compute_seniority_bonus(gross_salary: Decimal, seniority_years: u32) -> Decimal {
    if seniority_years < SENIORITY_MIN_YEARS {
        return Decimal::ZERO;
    }

    let accrued = Decimal::from(seniority_years) * seniority_accrual_per_year();
    let rate = accrued.min(seniority_cap());
    gross_salary * rate
}
