//! Calculation results.

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Contribution of each emission source to the gross total (kg CO2e).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBreakdown {
    pub electricity: FloatValue,
    pub piped_gas: FloatValue,
    pub cng_cylinder: FloatValue,
    pub petrol: FloatValue,
    pub diesel: FloatValue,
    pub cng_vehicle: FloatValue,
}

impl SourceBreakdown {
    /// Sum of all contributions, accumulated in form order.
    pub fn total(&self) -> FloatValue {
        self.electricity
            + self.piped_gas
            + self.cng_cylinder
            + self.petrol
            + self.diesel
            + self.cng_vehicle
    }

    /// Domestic energy share (electricity, piped gas and cylinders).
    pub fn domestic(&self) -> FloatValue {
        self.electricity + self.piped_gas + self.cng_cylinder
    }

    /// Transport share (petrol, diesel and vehicle CNG).
    pub fn transport(&self) -> FloatValue {
        self.petrol + self.diesel + self.cng_vehicle
    }
}

/// Outcome of one footprint calculation.
///
/// All figures are unrounded. `net_kg_co2e` may be negative, in which case
/// the offsets exceed the emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    pub breakdown: SourceBreakdown,
    pub gross_kg_co2e: FloatValue,
    pub solar_offset_kg_co2e: FloatValue,
    pub tree_offset_kg_co2e: FloatValue,
    pub net_kg_co2e: FloatValue,
    /// Extra solar capacity (kWp) that alone would bring a positive net to zero
    pub solar_kwp_needed_for_neutrality: FloatValue,
    /// Extra trees that alone would bring a positive net to zero
    pub trees_needed_for_neutrality: u64,
}

/// Whether a household has reached neutrality, and what it would take if not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NeutralityStatus {
    /// Net is positive. The two figures are alternatives, not a combined plan.
    ActionNeeded {
        solar_kwp: FloatValue,
        trees: u64,
    },
    /// Net is zero or negative; `surplus_kg` is the excess offset.
    Neutral { surplus_kg: FloatValue },
}

impl EmissionResult {
    pub fn is_neutral(&self) -> bool {
        self.net_kg_co2e <= 0.0
    }

    /// Offsets exceeding emissions, or 0 while net is positive.
    pub fn surplus_kg_co2e(&self) -> FloatValue {
        if self.net_kg_co2e < 0.0 {
            -self.net_kg_co2e
        } else {
            0.0
        }
    }

    pub fn total_offset_kg_co2e(&self) -> FloatValue {
        self.solar_offset_kg_co2e + self.tree_offset_kg_co2e
    }

    pub fn status(&self) -> NeutralityStatus {
        if self.is_neutral() {
            NeutralityStatus::Neutral {
                surplus_kg: self.surplus_kg_co2e(),
            }
        } else {
            NeutralityStatus::ActionNeeded {
                solar_kwp: self.solar_kwp_needed_for_neutrality,
                trees: self.trees_needed_for_neutrality,
            }
        }
    }
}
