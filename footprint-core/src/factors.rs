//! Emission factor table
//!
//! Linear factors converting physical consumption quantities into kilograms
//! of CO2-equivalent, and the offsets credited to green assets.

use crate::errors::{FootprintError, FootprintResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Emission and offset factors used by the calculator.
///
/// Emissions from independent sources combine additively:
///
/// $$E_{gross} = \sum_i q_i \cdot f_i$$
///
/// Solar capacity is credited with the grid emissions it displaces, so the
/// solar offset factor is derived from the annual yield and the grid factor:
///
/// $$f_{solar} = Y_{solar} \cdot f_{grid}$$
///
/// A table is immutable once constructed. [`EmissionFactors::STANDARD`] holds
/// the reference values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    /// Grid electricity
    /// unit: kg CO2e / kWh
    /// default: 1.02
    pub grid_electricity: FloatValue,

    /// Piped natural gas
    /// unit: kg CO2e / SCM
    /// default: 1.88
    pub piped_gas: FloatValue,

    /// Petrol
    /// unit: kg CO2e / L
    /// default: 2.3
    pub petrol: FloatValue,

    /// Diesel
    /// unit: kg CO2e / L
    /// default: 2.7
    pub diesel: FloatValue,

    /// Compressed natural gas, used for both domestic cylinders and vehicles
    /// unit: kg CO2e / kg
    /// default: 2.7
    pub cng: FloatValue,

    /// Grid electricity displaced per unit of installed solar capacity
    /// unit: kWh / kWp
    /// default: 120.0
    pub solar_yield_kwh_per_kwp: FloatValue,

    /// Emissions avoided per tree
    /// unit: kg CO2e / tree
    /// default: 5.0
    pub tree_offset: FloatValue,
}

impl EmissionFactors {
    pub const STANDARD: EmissionFactors = EmissionFactors {
        grid_electricity: 1.02,
        piped_gas: 1.88,
        petrol: 2.3,
        diesel: 2.7,
        cng: 2.7,
        solar_yield_kwh_per_kwp: 120.0,
        tree_offset: 5.0,
    };

    /// Emissions avoided per kWp of installed solar capacity (kg CO2e / kWp).
    pub fn solar_offset(&self) -> FloatValue {
        self.solar_yield_kwh_per_kwp * self.grid_electricity
    }

    /// Check that the table can be used by the calculator.
    ///
    /// Every factor must be finite and non-negative. The two offset factors
    /// are divisors for the neutrality estimates and must be strictly positive.
    pub fn validate(&self) -> FootprintResult<()> {
        let emission_factors = [
            ("grid_electricity", self.grid_electricity),
            ("piped_gas", self.piped_gas),
            ("petrol", self.petrol),
            ("diesel", self.diesel),
            ("cng", self.cng),
        ];
        for (factor, value) in emission_factors {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::InvalidFactor {
                    factor: factor.to_string(),
                    value,
                });
            }
        }

        let offset_factors = [
            ("solar_offset", self.solar_offset()),
            ("tree_offset", self.tree_offset),
        ];
        for (factor, value) in offset_factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(FootprintError::InvalidFactor {
                    factor: factor.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let factors = EmissionFactors::default();
        assert!((factors.grid_electricity - 1.02).abs() < 1e-10);
        assert!((factors.piped_gas - 1.88).abs() < 1e-10);
        assert!((factors.petrol - 2.3).abs() < 1e-10);
        assert!((factors.diesel - 2.7).abs() < 1e-10);
        assert!((factors.cng - 2.7).abs() < 1e-10);
        assert!((factors.tree_offset - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_solar_offset_is_derived_from_grid() {
        let factors = EmissionFactors::STANDARD;
        assert!((factors.solar_offset() - 122.4).abs() < 1e-10);

        let cleaner_grid = EmissionFactors {
            grid_electricity: 0.5,
            ..EmissionFactors::STANDARD
        };
        assert!((cleaner_grid.solar_offset() - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_standard_table_is_valid() {
        assert!(EmissionFactors::STANDARD.validate().is_ok());
    }

    #[test]
    fn test_negative_factor_rejected() {
        let factors = EmissionFactors {
            diesel: -2.7,
            ..EmissionFactors::STANDARD
        };
        match factors.validate() {
            Err(FootprintError::InvalidFactor { factor, .. }) => assert_eq!(factor, "diesel"),
            other => panic!("Expected InvalidFactor, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_offset_rejected() {
        let factors = EmissionFactors {
            tree_offset: 0.0,
            ..EmissionFactors::STANDARD
        };
        assert!(factors.validate().is_err());

        let factors = EmissionFactors {
            solar_yield_kwh_per_kwp: FloatValue::NAN,
            ..EmissionFactors::STANDARD
        };
        assert!(factors.validate().is_err());
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let factors: EmissionFactors = serde_json::from_str(r#"{"petrol": 2.31}"#).unwrap();
        assert!((factors.petrol - 2.31).abs() < 1e-10);
        assert!((factors.diesel - 2.7).abs() < 1e-10);
    }
}
