//! Salary input model and related types.
//!
//! This module defines the [`SalaryInput`] struct describing a single
//! calculation request, together with the [`SalaryMode`] and
//! [`MaritalStatus`] enums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Maximum number of months the first-employment IR exemption can cover.
pub const MAX_EXEMPTION_MONTHS: u32 = 36;

/// Upper bound on any monthly monetary input, in currency units.
///
/// Amounts beyond this bound carry no payroll meaning and would push the
/// unrounded pipeline toward `Decimal`'s limits.
pub const MAX_MONTHLY_AMOUNT: i64 = 1_000_000_000;

/// Determines how the `base_salary` of a request is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryMode {
    /// `base_salary` is the gross salary; compute the net.
    Gross,
    /// `base_salary` is the desired net salary; solve for the gross.
    Net,
}

/// Marital status of the employee, used for the family IR deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Single, no spousal deduction.
    Single,
    /// Married, entitled to the spousal deduction.
    Married,
    /// Divorced, no spousal deduction.
    Divorced,
    /// Widowed, no spousal deduction.
    Widowed,
}

impl MaritalStatus {
    /// Returns true if the employee is entitled to the spousal deduction.
    pub fn is_married(&self) -> bool {
        matches!(self, MaritalStatus::Married)
    }
}

/// A single, fully-constructed payroll calculation request.
///
/// The engine never mutates a `SalaryInput`; callers build one wholesale
/// (typically from a validated form or API request) and pass it by
/// reference. All monetary amounts are monthly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// The gross salary or the desired net salary, per `salary_mode`.
    pub base_salary: Decimal,
    /// Whether `base_salary` is a gross amount or a net target.
    pub salary_mode: SalaryMode,
    /// Recurring monthly bonus, taxable.
    #[serde(default)]
    pub fixed_bonus: Decimal,
    /// One-off bonus for the month, taxable.
    #[serde(default)]
    pub exceptional_bonus: Decimal,
    /// Benefits in kind (company car, housing, ...), taxable.
    #[serde(default)]
    pub benefits_in_kind: Decimal,
    /// Completed years of seniority with the employer.
    #[serde(default)]
    pub seniority_years: u32,
    /// Marital status, used for the family IR deduction.
    pub marital_status: MaritalStatus,
    /// Number of dependent children (capped for allowance purposes).
    #[serde(default)]
    pub dependent_children: u32,
    /// Whether CNSS social security contributions apply.
    #[serde(default = "default_true")]
    pub enable_social_security: bool,
    /// Whether AMO health insurance contributions apply.
    #[serde(default = "default_true")]
    pub enable_health_insurance: bool,
    /// Whether CIMR supplementary pension contributions apply.
    #[serde(default)]
    pub enable_supplementary_pension: bool,
    /// Employee CIMR rate as a percentage (0-100), used only when enabled.
    #[serde(default)]
    pub employee_pension_rate: Decimal,
    /// Employer CIMR rate as a percentage (0-100), used only when enabled.
    #[serde(default)]
    pub employer_pension_rate: Decimal,
    /// Whether the first-employment IR exemption applies.
    #[serde(default)]
    pub tax_exempt: bool,
    /// Remaining months of the IR exemption (0-36), informational.
    #[serde(default)]
    pub exemption_months: u32,
}

fn default_true() -> bool {
    true
}

impl SalaryInput {
    /// Validates the input, identifying the first offending field.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when a monetary amount is
    /// negative or exceeds [`MAX_MONTHLY_AMOUNT`], a pension rate falls
    /// outside 0-100, or `exemption_months` exceeds
    /// [`MAX_EXEMPTION_MONTHS`].
    pub fn validate(&self) -> EngineResult<()> {
        let max_amount = Decimal::from(MAX_MONTHLY_AMOUNT);
        let monetary = [
            ("base_salary", self.base_salary),
            ("fixed_bonus", self.fixed_bonus),
            ("exceptional_bonus", self.exceptional_bonus),
            ("benefits_in_kind", self.benefits_in_kind),
        ];
        for (field, value) in monetary {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
            if value > max_amount {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not exceed {}", MAX_MONTHLY_AMOUNT),
                });
            }
        }

        let percent_bounded = [
            ("employee_pension_rate", self.employee_pension_rate),
            ("employer_pension_rate", self.employer_pension_rate),
        ];
        for (field, value) in percent_bounded {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "must be a percentage between 0 and 100".to_string(),
                });
            }
        }

        if self.exemption_months > MAX_EXEMPTION_MONTHS {
            return Err(EngineError::InvalidInput {
                field: "exemption_months".to_string(),
                message: format!("must not exceed {}", MAX_EXEMPTION_MONTHS),
            });
        }

        Ok(())
    }
}
