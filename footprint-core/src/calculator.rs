//! Carbon footprint calculator
//!
//! Converts a [`ConsumptionInput`] into an [`EmissionResult`] using a linear
//! emission factor table.
//!
//! # Algorithm
//!
//! 1. Multiply each emission source by its factor and sum the contributions:
//!    $E_{gross} = \sum_i q_i \cdot f_i$
//! 2. Credit the green assets: $O_{solar} = P_{kWp} \cdot f_{solar}$ and
//!    $O_{tree} = N_{trees} \cdot f_{tree}$
//! 3. Net emissions: $E_{net} = E_{gross} - O_{solar} - O_{tree}$
//! 4. When $E_{net} > 0$, estimate each neutrality path on its own:
//!    $E_{net} / f_{solar}$ kWp of solar, or $\lceil E_{net} / f_{tree} \rceil$ trees.
//!
//! No intermediate value is rounded.
//!
//! The calculator holds no state between calls and can be shared freely
//! across threads.

use crate::errors::FootprintResult;
use crate::factors::EmissionFactors;
use crate::input::ConsumptionInput;
use crate::result::{EmissionResult, SourceBreakdown};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// How the calculator treats out of range inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Accept every input as given. Calculation never fails.
    #[default]
    Forgiving,
    /// Reject negative or non-finite fields with `InvalidInput`.
    Strict,
}

/// Footprint calculator bound to a factor table.
///
/// Only built through [`EmissionCalculator::from_factors`] or
/// [`EmissionCalculator::standard`], so the table is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionCalculator {
    factors: EmissionFactors,
    policy: InputPolicy,
}

impl EmissionCalculator {
    /// Calculator using [`EmissionFactors::STANDARD`] in forgiving mode.
    pub const fn standard() -> Self {
        Self {
            factors: EmissionFactors::STANDARD,
            policy: InputPolicy::Forgiving,
        }
    }

    /// Create a calculator from a factor table.
    ///
    /// The table is validated before use.
    pub fn from_factors(factors: EmissionFactors, policy: InputPolicy) -> FootprintResult<Self> {
        factors.validate()?;
        Ok(Self { factors, policy })
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Calculate a footprint, applying the input policy.
    pub fn calculate(&self, input: &ConsumptionInput) -> FootprintResult<EmissionResult> {
        if self.policy == InputPolicy::Strict {
            input.validate()?;
        }
        Ok(self.compute(input))
    }

    /// Calculate a footprint without validation.
    pub fn compute(&self, input: &ConsumptionInput) -> EmissionResult {
        let f = &self.factors;

        let breakdown = SourceBreakdown {
            electricity: input.grid_electricity_kwh * f.grid_electricity,
            piped_gas: input.piped_gas_scm * f.piped_gas,
            cng_cylinder: input.cng_cylinder_kg * f.cng,
            petrol: input.petrol_liters * f.petrol,
            diesel: input.diesel_liters * f.diesel,
            cng_vehicle: input.cng_vehicle_kg * f.cng,
        };
        let gross = breakdown.total();

        let solar_offset_factor = f.solar_offset();
        let solar_offset = input.solar_capacity_kwp * solar_offset_factor;
        let tree_offset = FloatValue::from(input.tree_count) * f.tree_offset;

        let net = gross - solar_offset - tree_offset;

        // The two paths are alternatives; neither accounts for the other
        let (solar_needed, trees_needed) = if net > 0.0 {
            (
                net / solar_offset_factor,
                (net / f.tree_offset).ceil() as u64,
            )
        } else {
            (0.0, 0)
        };

        EmissionResult {
            breakdown,
            gross_kg_co2e: gross,
            solar_offset_kg_co2e: solar_offset,
            tree_offset_kg_co2e: tree_offset,
            net_kg_co2e: net,
            solar_kwp_needed_for_neutrality: solar_needed,
            trees_needed_for_neutrality: trees_needed,
        }
    }
}

impl Default for EmissionCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Calculate a footprint with the standard factor table.
///
/// Never fails: inputs are used exactly as given.
pub fn compute_emissions(input: &ConsumptionInput) -> EmissionResult {
    EmissionCalculator::standard().compute(input)
}
