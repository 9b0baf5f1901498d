//! Reference households, from form text through to stored history.

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use footprint::{
    compute_emissions, Assessor, ConsumptionInput, FootprintConfig, FootprintError, HistoryStore,
    InMemoryHistory, InputPolicy, NeutralityStatus, RawConsumptionForm,
};

mod reference_households {
    use super::*;

    #[test]
    fn all_zero() {
        let result = compute_emissions(&ConsumptionInput::default());
        assert_eq!(result.gross_kg_co2e, 0.0);
        assert_eq!(result.solar_offset_kg_co2e, 0.0);
        assert_eq!(result.tree_offset_kg_co2e, 0.0);
        assert_eq!(result.net_kg_co2e, 0.0);
        assert_eq!(result.solar_kwp_needed_for_neutrality, 0.0);
        assert_eq!(result.trees_needed_for_neutrality, 0);
    }

    #[test]
    fn action_needed() {
        let input = ConsumptionInput {
            grid_electricity_kwh: 420.0,
            piped_gas_scm: 25.0,
            petrol_liters: 55.0,
            solar_capacity_kwp: 2.0,
            tree_count: 8,
            ..ConsumptionInput::default()
        };
        let result = compute_emissions(&input);
        assert_relative_eq!(result.breakdown.electricity, 428.4, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.piped_gas, 47.0, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.petrol, 126.5, epsilon = 1e-9);
        assert_relative_eq!(result.gross_kg_co2e, 601.9, epsilon = 1e-9);
        assert_relative_eq!(result.solar_offset_kg_co2e, 244.8, epsilon = 1e-9);
        assert_relative_eq!(result.tree_offset_kg_co2e, 40.0, epsilon = 1e-9);
        assert_relative_eq!(result.net_kg_co2e, 317.1, epsilon = 1e-9);

        match result.status() {
            NeutralityStatus::ActionNeeded { solar_kwp, trees } => {
                assert_relative_eq!(solar_kwp, 2.5907, epsilon = 1e-4);
                assert_eq!(trees, 64);
            }
            other => panic!("Expected ActionNeeded, got {:?}", other),
        }
    }

    #[test]
    fn surplus() {
        let input = ConsumptionInput {
            grid_electricity_kwh: 10.0,
            solar_capacity_kwp: 5.0,
            ..ConsumptionInput::default()
        };
        let result = compute_emissions(&input);
        assert_relative_eq!(result.gross_kg_co2e, 10.2, epsilon = 1e-9);
        assert_relative_eq!(result.solar_offset_kg_co2e, 612.0, epsilon = 1e-9);
        assert_relative_eq!(result.net_kg_co2e, -601.8, epsilon = 1e-9);
        assert_relative_eq!(result.surplus_kg_co2e(), 601.8, epsilon = 1e-9);
        assert_eq!(result.solar_kwp_needed_for_neutrality, 0.0);
        assert_eq!(result.trees_needed_for_neutrality, 0);
    }
}

mod submissions {
    use super::*;

    fn household_form() -> RawConsumptionForm {
        serde_json::from_str(
            r#"{
                "name": "Home",
                "address": "Pune, MH",
                "gridElectricity": "420",
                "gasPNG": "25",
                "cngCylinder": "",
                "petrol": "55",
                "diesel": "",
                "cng": "",
                "solarPanels": "4",
                "solarCapacity": "2",
                "treeCount": "8"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn form_payload_to_history() {
        let assessor = Assessor::new(&FootprintConfig::default()).unwrap();
        let assessment = assessor.assess(&household_form()).unwrap();
        let summary = assessment.summary();
        assert_eq!(summary.name, "Home");
        assert_eq!(summary.displayed_net_kg, 317.0);
        assert_eq!(summary.trees_needed, 64);

        let mut history = InMemoryHistory::new();
        let id = history.append(
            "asha",
            Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap(),
            &assessment.name,
            assessment.input,
            assessment.result,
        )
        .unwrap();
        assert_eq!(history.get(id).unwrap().title(), "Net: 317 kg");
    }

    #[test]
    fn strict_configuration_from_toml() {
        let config = FootprintConfig::from_toml_str("input_policy = \"strict\"").unwrap();
        assert_eq!(config.input_policy, InputPolicy::Strict);
        let assessor = Assessor::new(&config).unwrap();

        let mut form = household_form();
        assert!(assessor.assess(&form).is_ok());

        form.petrol = "-55".to_string();
        match assessor.assess(&form) {
            Err(FootprintError::InvalidInput { field, .. }) => assert_eq!(field, "petrolLiters"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn fixture_mode_fills_blank_form() {
        let config: FootprintConfig = toml::from_str("use_fixture_data = true").unwrap();
        let assessor = Assessor::new(&config).unwrap();
        let assessment = assessor.assess(&RawConsumptionForm::default()).unwrap();
        assert!(assessment.from_fixture);
        assert_relative_eq!(assessment.result.net_kg_co2e, 317.1, epsilon = 1e-9);
    }
}
