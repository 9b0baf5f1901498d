//! Consumption inputs.
//!
//! [`ConsumptionInput`] is the typed record the calculator works on.
//! [`RawConsumptionForm`] is the text payload submitted by the assessment
//! form, converted with the shared coercers in [`crate::coerce`].

use crate::coerce::{parse_count, parse_count_strict, parse_quantity, parse_quantity_strict};
use crate::errors::{FootprintError, FootprintResult};
use crate::fields::ConsumptionField;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Consumption figures for one billing period.
///
/// Missing fields deserialize to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsumptionInput {
    /// unit: kWh
    pub grid_electricity_kwh: FloatValue,
    /// unit: SCM
    pub piped_gas_scm: FloatValue,
    /// unit: kg
    pub cng_cylinder_kg: FloatValue,
    /// unit: L
    pub petrol_liters: FloatValue,
    /// unit: L
    pub diesel_liters: FloatValue,
    /// unit: kg
    pub cng_vehicle_kg: FloatValue,
    /// unit: kWp
    pub solar_capacity_kwp: FloatValue,
    pub tree_count: u32,
}

impl ConsumptionInput {
    /// Read a field as a float. Tree counts are widened.
    pub fn get(&self, field: ConsumptionField) -> FloatValue {
        match field {
            ConsumptionField::GridElectricity => self.grid_electricity_kwh,
            ConsumptionField::PipedGas => self.piped_gas_scm,
            ConsumptionField::CngCylinder => self.cng_cylinder_kg,
            ConsumptionField::Petrol => self.petrol_liters,
            ConsumptionField::Diesel => self.diesel_liters,
            ConsumptionField::CngVehicle => self.cng_vehicle_kg,
            ConsumptionField::SolarCapacity => self.solar_capacity_kwp,
            ConsumptionField::TreeCount => FloatValue::from(self.tree_count),
        }
    }

    /// Set a field from a float.
    ///
    /// Tree counts are truncated toward zero and clamped to the `u32` range.
    pub fn set(&mut self, field: ConsumptionField, value: FloatValue) {
        match field {
            ConsumptionField::GridElectricity => self.grid_electricity_kwh = value,
            ConsumptionField::PipedGas => self.piped_gas_scm = value,
            ConsumptionField::CngCylinder => self.cng_cylinder_kg = value,
            ConsumptionField::Petrol => self.petrol_liters = value,
            ConsumptionField::Diesel => self.diesel_liters = value,
            ConsumptionField::CngVehicle => self.cng_vehicle_kg = value,
            ConsumptionField::SolarCapacity => self.solar_capacity_kwp = value,
            ConsumptionField::TreeCount => self.tree_count = value.trunc() as u32,
        }
    }

    /// Builder-style variant of [`ConsumptionInput::set`].
    pub fn with(mut self, field: ConsumptionField, value: FloatValue) -> Self {
        self.set(field, value);
        self
    }

    /// Reject negative or non-finite fields.
    ///
    /// Reports the first offending field in form order.
    pub fn validate(&self) -> FootprintResult<()> {
        for field in ConsumptionField::ALL {
            let value = self.get(field);
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::invalid_input(field.name(), value));
            }
        }
        Ok(())
    }
}

/// Text payload of the assessment form.
///
/// Field names follow the form's wire format. `solarPanels` is the number of
/// installed panels; it is shown back to the user but never enters the
/// calculation, which only uses `solarCapacity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConsumptionForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub grid_electricity: String,
    #[serde(rename = "gasPNG")]
    pub gas_png: String,
    pub cng_cylinder: String,
    pub petrol: String,
    pub diesel: String,
    pub cng: String,
    pub solar_panels: String,
    pub solar_capacity: String,
    pub tree_count: String,
}

impl RawConsumptionForm {
    /// Raw text for a field.
    pub fn text(&self, field: ConsumptionField) -> &str {
        match field {
            ConsumptionField::GridElectricity => &self.grid_electricity,
            ConsumptionField::PipedGas => &self.gas_png,
            ConsumptionField::CngCylinder => &self.cng_cylinder,
            ConsumptionField::Petrol => &self.petrol,
            ConsumptionField::Diesel => &self.diesel,
            ConsumptionField::CngVehicle => &self.cng,
            ConsumptionField::SolarCapacity => &self.solar_capacity,
            ConsumptionField::TreeCount => &self.tree_count,
        }
    }

    pub fn text_mut(&mut self, field: ConsumptionField) -> &mut String {
        match field {
            ConsumptionField::GridElectricity => &mut self.grid_electricity,
            ConsumptionField::PipedGas => &mut self.gas_png,
            ConsumptionField::CngCylinder => &mut self.cng_cylinder,
            ConsumptionField::Petrol => &mut self.petrol,
            ConsumptionField::Diesel => &mut self.diesel,
            ConsumptionField::CngVehicle => &mut self.cng,
            ConsumptionField::SolarCapacity => &mut self.solar_capacity,
            ConsumptionField::TreeCount => &mut self.tree_count,
        }
    }

    /// True when no numeric field (including the panel count) holds any text.
    pub fn is_blank(&self) -> bool {
        self.solar_panels.trim().is_empty()
            && ConsumptionField::ALL
                .iter()
                .all(|field| self.text(*field).trim().is_empty())
    }

    /// Coerce every field, reading blank or invalid text as zero.
    pub fn to_input(&self) -> ConsumptionInput {
        let mut input = ConsumptionInput {
            tree_count: parse_count(&self.tree_count),
            ..ConsumptionInput::default()
        };
        for field in ConsumptionField::ALL {
            if field != ConsumptionField::TreeCount {
                input.set(field, parse_quantity(self.text(field)));
            }
        }
        input
    }

    /// Coerce every field, rejecting invalid or negative text.
    pub fn to_input_strict(&self) -> FootprintResult<ConsumptionInput> {
        let mut input = ConsumptionInput {
            tree_count: parse_count_strict(ConsumptionField::TreeCount.name(), &self.tree_count)?,
            ..ConsumptionInput::default()
        };
        for field in ConsumptionField::ALL {
            if field != ConsumptionField::TreeCount {
                input.set(field, parse_quantity_strict(field.name(), self.text(field))?);
            }
        }
        Ok(input)
    }

    /// Panel count as entered, coerced like any other count.
    pub fn solar_panel_count(&self) -> u32 {
        parse_count(&self.solar_panels)
    }
}
