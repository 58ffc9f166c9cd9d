//! Rate table types for payroll calculation.
//!
//! This module contains the strongly-typed rate table structures that are
//! either built in (the Morocco 2025 statutory constants) or deserialized
//! from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about a rate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTableMetadata {
    /// The human-readable name of the rate table.
    pub name: String,
    /// The tax year the rates apply to.
    pub tax_year: u16,
    /// URL to the official documentation of the rates.
    pub source_url: String,
}

/// Employee and employer rates for a contribution scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionRate {
    /// The employee-side rate, as a fraction (e.g. 0.0448 for 4.48%).
    pub employee: Decimal,
    /// The employer-side rate, as a fraction.
    pub employer: Decimal,
    /// Monthly salary cap for the contribution base, if any.
    #[serde(default)]
    pub ceiling: Option<Decimal>,
}

/// A single progressive income tax bracket.
///
/// Brackets apply to the monthly taxable net and are selected on the
/// half-open interval `[min, max)`; the last bracket has no upper bound.
/// The `amount_to_deduct` constant makes the tax function continuous at
/// bracket boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (inclusive).
    pub min: Decimal,
    /// Upper bound of the bracket (exclusive); `None` for the last bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal tax rate, as a fraction.
    pub rate: Decimal,
    /// Constant subtracted so the tax is continuous across brackets.
    pub amount_to_deduct: Decimal,
}

impl TaxBracket {
    /// Returns true if the given taxable net falls within this bracket.
    pub fn contains(&self, taxable_net: Decimal) -> bool {
        taxable_net >= self.min && self.max.is_none_or(|max| taxable_net < max)
    }
}

/// Annual family deductions applied to the income tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyAllowance {
    /// Annual deduction for a married employee.
    pub married_annual_deduction: Decimal,
    /// Annual deduction per dependent child.
    pub per_child_annual_deduction: Decimal,
    /// Maximum number of children counted for the deduction.
    pub max_children: u32,
}

/// The complete statutory rate table used by the engine.
///
/// A rate table is loaded or constructed once at process startup and never
/// mutated; every calculation reads it through a shared reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Rate table metadata.
    pub metadata: RateTableMetadata,
    /// CNSS social security rates (ceiling-capped base).
    pub social_security: ContributionRate,
    /// AMO health insurance rates (no ceiling).
    pub health_insurance: ContributionRate,
    /// Flat employer-only vocational training tax rate.
    pub vocational_training_rate: Decimal,
    /// Progressive income tax brackets, ordered and contiguous from 0.
    pub income_tax_brackets: Vec<TaxBracket>,
    /// Family deduction constants.
    pub family_allowance: FamilyAllowance,
}

impl RateTable {
    /// Returns the built-in Morocco 2025 statutory rate table.
    pub fn morocco_2025() -> Self {
        Self {
            metadata: RateTableMetadata {
                name: "Morocco statutory payroll rates".to_string(),
                tax_year: 2025,
                source_url: "https://www.tax.gov.ma".to_string(),
            },
            social_security: ContributionRate {
                employee: Decimal::new(448, 4),
                employer: Decimal::new(898, 4),
                ceiling: Some(Decimal::from(6000)),
            },
            health_insurance: ContributionRate {
                employee: Decimal::new(226, 4),
                employer: Decimal::new(411, 4),
                ceiling: None,
            },
            vocational_training_rate: Decimal::new(188, 4),
            income_tax_brackets: vec![
                TaxBracket {
                    min: Decimal::ZERO,
                    max: Some(Decimal::from(2500)),
                    rate: Decimal::ZERO,
                    amount_to_deduct: Decimal::ZERO,
                },
                TaxBracket {
                    min: Decimal::from(2500),
                    max: Some(Decimal::new(416_667, 2)),
                    rate: Decimal::new(10, 2),
                    amount_to_deduct: Decimal::from(250),
                },
                TaxBracket {
                    min: Decimal::new(416_667, 2),
                    max: Some(Decimal::from(5000)),
                    rate: Decimal::new(20, 2),
                    amount_to_deduct: Decimal::new(66_667, 2),
                },
                TaxBracket {
                    min: Decimal::from(5000),
                    max: Some(Decimal::new(666_667, 2)),
                    rate: Decimal::new(30, 2),
                    amount_to_deduct: Decimal::new(116_667, 2),
                },
                TaxBracket {
                    min: Decimal::new(666_667, 2),
                    max: Some(Decimal::from(15000)),
                    rate: Decimal::new(34, 2),
                    amount_to_deduct: Decimal::new(143_333, 2),
                },
                TaxBracket {
                    min: Decimal::from(15000),
                    max: None,
                    rate: Decimal::new(38, 2),
                    amount_to_deduct: Decimal::new(203_333, 2),
                },
            ],
            family_allowance: FamilyAllowance {
                married_annual_deduction: Decimal::from(360),
                per_child_annual_deduction: Decimal::from(30),
                max_children: 6,
            },
        }
    }

    /// Checks that the rate table is well formed.
    ///
    /// The bracket table must start at 0, be contiguous and non-overlapping,
    /// and end with a single unbounded bracket; all rates must be fractions
    /// within [0, 1] and the contribution ceiling, if set, must be positive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRateTable`] describing the first
    /// defect found.
    pub fn validate(&self) -> EngineResult<()> {
        let brackets = &self.income_tax_brackets;
        let first = brackets.first().ok_or_else(|| EngineError::InvalidRateTable {
            message: "income tax bracket table is empty".to_string(),
        })?;

        if first.min != Decimal::ZERO {
            return Err(EngineError::InvalidRateTable {
                message: format!("first bracket must start at 0, starts at {}", first.min),
            });
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(EngineError::InvalidRateTable {
                    message: format!("bracket {} has rate {} outside [0, 1]", index, bracket.rate),
                });
            }
            if bracket.amount_to_deduct < Decimal::ZERO {
                return Err(EngineError::InvalidRateTable {
                    message: format!("bracket {} has a negative deduction amount", index),
                });
            }

            let is_last = index == brackets.len() - 1;
            match bracket.max {
                None if !is_last => {
                    return Err(EngineError::InvalidRateTable {
                        message: format!("bracket {} is unbounded but not last", index),
                    });
                }
                Some(max) if is_last => {
                    return Err(EngineError::InvalidRateTable {
                        message: format!("last bracket must be unbounded, ends at {}", max),
                    });
                }
                Some(max) => {
                    if max <= bracket.min {
                        return Err(EngineError::InvalidRateTable {
                            message: format!("bracket {} is empty or inverted", index),
                        });
                    }
                    let next = &brackets[index + 1];
                    if next.min != max {
                        return Err(EngineError::InvalidRateTable {
                            message: format!(
                                "gap or overlap between brackets {} and {}: {} vs {}",
                                index,
                                index + 1,
                                max,
                                next.min
                            ),
                        });
                    }
                }
                None => {}
            }
        }

        for (name, rates) in [
            ("social_security", &self.social_security),
            ("health_insurance", &self.health_insurance),
        ] {
            for (side, rate) in [("employee", rates.employee), ("employer", rates.employer)] {
                if rate < Decimal::ZERO || rate > Decimal::ONE {
                    return Err(EngineError::InvalidRateTable {
                        message: format!("{} {} rate {} outside [0, 1]", name, side, rate),
                    });
                }
            }
            if let Some(ceiling) = rates.ceiling
                && ceiling <= Decimal::ZERO
            {
                return Err(EngineError::InvalidRateTable {
                    message: format!("{} ceiling must be positive, got {}", name, ceiling),
                });
            }
        }

        if self.vocational_training_rate < Decimal::ZERO
            || self.vocational_training_rate > Decimal::ONE
        {
            return Err(EngineError::InvalidRateTable {
                message: format!(
                    "vocational training rate {} outside [0, 1]",
                    self.vocational_training_rate
                ),
            });
        }

        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::morocco_2025()
    }
}
