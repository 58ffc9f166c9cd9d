//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateTable;
use crate::models::{MaritalStatus, SalaryInput, SalaryMode};

/// Request body for the `/calculate` endpoint.
///
/// Contains the salary input and an optional rate table override. When no
/// override is supplied the server's rate table (by default the Morocco
/// 2025 statutory constants) is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The salary input to calculate for.
    pub salary: SalaryInputRequest,
    /// Optional rate table override, validated before use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateTable>,
}

/// Salary input in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryInputRequest {
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
    /// Benefits in kind, taxable.
    #[serde(default)]
    pub benefits_in_kind: Decimal,
    /// Completed years of seniority with the employer.
    #[serde(default)]
    pub seniority_years: u32,
    /// Marital status, used for the family IR deduction.
    pub marital_status: MaritalStatus,
    /// Number of dependent children.
    #[serde(default)]
    pub dependent_children: u32,
    /// Whether CNSS contributions apply.
    #[serde(default = "default_true")]
    pub enable_social_security: bool,
    /// Whether AMO contributions apply.
    #[serde(default = "default_true")]
    pub enable_health_insurance: bool,
    /// Whether CIMR contributions apply.
    #[serde(default)]
    pub enable_supplementary_pension: bool,
    /// Employee CIMR rate as a percentage (0-100).
    #[serde(default)]
    pub employee_pension_rate: Decimal,
    /// Employer CIMR rate as a percentage (0-100).
    #[serde(default)]
    pub employer_pension_rate: Decimal,
    /// Whether the first-employment IR exemption applies.
    #[serde(default)]
    pub tax_exempt: bool,
    /// Remaining months of the IR exemption (0-36).
    #[serde(default)]
    pub exemption_months: u32,
}

fn default_true() -> bool {
    true
}

impl From<SalaryInputRequest> for SalaryInput {
    fn from(req: SalaryInputRequest) -> Self {
        SalaryInput {
            base_salary: req.base_salary,
            salary_mode: req.salary_mode,
            fixed_bonus: req.fixed_bonus,
            exceptional_bonus: req.exceptional_bonus,
            benefits_in_kind: req.benefits_in_kind,
            seniority_years: req.seniority_years,
            marital_status: req.marital_status,
            dependent_children: req.dependent_children,
            enable_social_security: req.enable_social_security,
            enable_health_insurance: req.enable_health_insurance,
            enable_supplementary_pension: req.enable_supplementary_pension,
            employee_pension_rate: req.employee_pension_rate,
            employer_pension_rate: req.employer_pension_rate,
            tax_exempt: req.tax_exempt,
            exemption_months: req.exemption_months,
        }
    }
}
