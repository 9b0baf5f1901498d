use chrono::{DateTime, Utc};
use footprint_core::summary::{round_half_up, ResultSummary};
use footprint_core::{ConsumptionInput, EmissionResult};
use serde::{Deserialize, Serialize};

/// A stored calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub id: u64,
    pub user: String,
    pub recorded_at: DateTime<Utc>,
    /// Name the assessment was made under, e.g. "Home"
    pub name: String,
    pub inputs: ConsumptionInput,
    pub result: EmissionResult,
}

impl CalculationRecord {
    /// One-line title for history lists, e.g. `Net: 317 kg`.
    pub fn title(&self) -> String {
        format!("Net: {} kg", round_half_up(self.result.net_kg_co2e))
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_result(self.name.clone(), &self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use footprint_core::compute_emissions;

    fn record(input: ConsumptionInput) -> CalculationRecord {
        CalculationRecord {
            id: 1,
            user: "asha".to_string(),
            recorded_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            name: "Home".to_string(),
            inputs: input,
            result: compute_emissions(&input),
        }
    }

    #[test]
    fn title_rounds_net() {
        let input = ConsumptionInput {
            grid_electricity_kwh: 420.0,
            piped_gas_scm: 25.0,
            petrol_liters: 55.0,
            solar_capacity_kwp: 2.0,
            tree_count: 8,
            ..ConsumptionInput::default()
        };
        assert_eq!(record(input).title(), "Net: 317 kg");
    }

    #[test]
    fn title_shows_negative_net() {
        let input = ConsumptionInput {
            grid_electricity_kwh: 10.0,
            solar_capacity_kwp: 5.0,
            ..ConsumptionInput::default()
        };
        assert_eq!(record(input).title(), "Net: -602 kg");
    }

    #[test]
    fn json_wire_names() {
        let json = serde_json::to_value(record(ConsumptionInput::default())).unwrap();
        assert_eq!(json["user"], "asha");
        assert_eq!(json["recordedAt"], "2024-03-01T09:30:00Z");
        assert!(json["inputs"]["gridElectricityKwh"].is_number());
        assert!(json["result"]["netKgCo2e"].is_number());
    }
}
