//! Iterative net-to-gross inversion.
//!
//! No closed form exists for the gross salary that produces a given net:
//! bracket selection and the CNSS ceiling make the net a piecewise
//! function of the gross. The solver runs a bounded fixed-point
//! iteration instead: seed a gross from an approximate overall deduction
//! rate, then repeatedly correct it by a damped fraction of the net
//! error. The iteration cap and the 1-unit tolerance bound both
//! precision and worst-case cost; convergence to the exact cent is not
//! guaranteed.
//!
//! The seed rate (18%) and damping factor (0.85) are empirical tuning
//! constants, not values derived from the statutory schedule. Retuning
//! them changes the convergence envelope documented in the tests.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::SalaryInput;

use super::forward::compute_for_gross;

/// Maximum number of correction iterations.
pub const MAX_GROSS_FROM_NET_ITERATIONS: u32 = 5;

/// Returns the net-error tolerance, in currency units.
pub fn net_tolerance() -> Decimal {
    Decimal::ONE
}

/// Returns the damped correction factor applied to the net error.
pub fn damping_factor() -> Decimal {
    Decimal::new(85, 2)
}

/// Returns the approximate combined employee deduction rate used to seed
/// the first gross guess.
pub fn seed_deduction_rate() -> Decimal {
    Decimal::new(18, 2)
}

/// Solves for the gross salary whose forward-computed net approximates
/// `target_net`.
///
/// The returned gross is unrounded; callers run the forward pipeline on
/// it one final time to package the result.
///
/// # Errors
///
/// Propagates any forward-pipeline error, which with a validated rate
/// table can only be a bracket-coverage failure.
pub fn solve_gross_from_net(
    target_net: Decimal,
    input: &SalaryInput,
    rates: &RateTable,
) -> EngineResult<Decimal> {
    let mut gross_salary = target_net / (Decimal::ONE - seed_deduction_rate());

    for _ in 0..MAX_GROSS_FROM_NET_ITERATIONS {
        let trial = compute_for_gross(gross_salary, input, rates)?;
        let error = trial.net_salary - target_net;

        if error.abs() < net_tolerance() {
            break;
        }

        gross_salary -= error * damping_factor();
    }

    Ok(gross_salary)
}
