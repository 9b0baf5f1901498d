//! Display-ready view of a calculation.
//!
//! Rounding happens here and only here; the figures in [`EmissionResult`]
//! stay unrounded.

use crate::result::EmissionResult;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Round to the nearest integer, with halves going toward positive infinity.
pub fn round_half_up(value: FloatValue) -> FloatValue {
    // `value - floor` is exact, unlike `value + 0.5`
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn round_to(value: FloatValue, decimals: i32) -> FloatValue {
    let scale = 10.0_f64.powi(decimals);
    round_half_up(value * scale) / scale
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Headline {
    CarbonNeutral,
    CarbonNeutralWithSurplus,
    ActionNeeded,
}

impl Headline {
    pub fn text(&self) -> &'static str {
        match self {
            Headline::CarbonNeutral => "Carbon Neutral",
            Headline::CarbonNeutralWithSurplus => "Carbon Neutral + Surplus!",
            Headline::ActionNeeded => "Action Needed",
        }
    }
}

/// Figures as shown on the result screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub name: String,
    /// Rounded net footprint, or 0 once neutral
    pub displayed_net_kg: FloatValue,
    /// Rounded excess offset, 0 unless net is negative
    pub surplus_kg: FloatValue,
    pub gross_kg: FloatValue,
    pub offset_kg: FloatValue,
    /// Solar path, two decimals
    pub solar_kwp_needed: FloatValue,
    /// Tree path
    pub trees_needed: u64,
    pub headline: Headline,
}

impl ResultSummary {
    pub fn from_result(name: impl Into<String>, result: &EmissionResult) -> Self {
        let rounded_net = round_half_up(result.net_kg_co2e);
        let surplus_kg = if result.net_kg_co2e < 0.0 {
            rounded_net.abs()
        } else {
            0.0
        };
        let headline = if !result.is_neutral() {
            Headline::ActionNeeded
        } else if surplus_kg > 0.0 {
            Headline::CarbonNeutralWithSurplus
        } else {
            Headline::CarbonNeutral
        };

        Self {
            name: name.into(),
            displayed_net_kg: if result.is_neutral() { 0.0 } else { rounded_net },
            surplus_kg,
            gross_kg: round_half_up(result.gross_kg_co2e),
            offset_kg: round_half_up(result.total_offset_kg_co2e()),
            solar_kwp_needed: round_to(result.solar_kwp_needed_for_neutrality, 2),
            trees_needed: result.trees_needed_for_neutrality,
            headline,
        }
    }

    pub fn headline_text(&self) -> &'static str {
        self.headline.text()
    }

    /// Whether the neutrality paths should be offered.
    pub fn shows_paths(&self) -> bool {
        self.headline == Headline::ActionNeeded
    }
}
