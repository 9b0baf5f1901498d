//! Consumption field definitions.
//!
//! Every quantity a household can report is described by a static
//! [`FieldDefinition`] carrying its wire name, display label, unit and the
//! form category it is grouped under.
//!
//! # Available Fields
//!
//! ## Domestic Energy
//! - `gridElectricityKwh` - Grid electricity in kWh
//! - `pipedGasScm` - Piped natural gas in SCM
//! - `cngCylinderKg` - Domestic CNG cylinder fuel in kg
//!
//! ## Transport
//! - `petrolLiters` - Vehicle petrol in L
//! - `dieselLiters` - Vehicle diesel in L
//! - `cngVehicleKg` - Vehicle CNG in kg
//!
//! ## Green Assets
//! - `solarCapacityKwp` - Installed solar capacity in kWp
//! - `treeCount` - Trees credited as offsets
//!
//! # Usage
//!
//! ```rust
//! use footprint_core::fields::{ConsumptionField, FieldCategory};
//!
//! let field = ConsumptionField::from_name("pipedGasScm").unwrap();
//! assert_eq!(field, ConsumptionField::PipedGas);
//! assert_eq!(field.unit(), "SCM");
//! assert_eq!(field.category(), FieldCategory::DomesticEnergy);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Form section a consumption field is shown under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldCategory {
    DomesticEnergy,
    Transport,
    GreenAssets,
}

impl FieldCategory {
    pub const ALL: [FieldCategory; 3] = [
        FieldCategory::DomesticEnergy,
        FieldCategory::Transport,
        FieldCategory::GreenAssets,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldCategory::DomesticEnergy => "Domestic Energy",
            FieldCategory::Transport => "Transport",
            FieldCategory::GreenAssets => "Green Assets",
        }
    }

    /// Fields grouped under this category, in form order.
    pub fn fields(&self) -> impl Iterator<Item = ConsumptionField> {
        let category = *self;
        ConsumptionField::ALL
            .into_iter()
            .filter(move |field| field.category() == category)
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static metadata for a consumption field.
#[derive(Debug)]
pub struct FieldDefinition {
    /// Wire name used in serialized inputs
    pub name: &'static str,
    /// Label shown next to the form checkbox
    pub label: &'static str,
    pub unit: &'static str,
    pub category: FieldCategory,
    pub description: &'static str,
    /// Whether the field is an offsetting asset rather than an emission source
    pub is_offset: bool,
}

macro_rules! define_field {
    (
        $var_name:ident,
        name = $name:expr,
        label = $label:expr,
        unit = $unit:expr,
        category = $category:expr,
        is_offset = $is_offset:expr,
        description = $description:expr $(,)?
    ) => {
        pub static $var_name: FieldDefinition = FieldDefinition {
            name: $name,
            label: $label,
            unit: $unit,
            category: $category,
            description: $description,
            is_offset: $is_offset,
        };
    };
}

// ============================================================================
// Domestic Energy
// ============================================================================

define_field!(
    FIELD_GRID_ELECTRICITY,
    name = "gridElectricityKwh",
    label = "Grid Electricity",
    unit = "kWh",
    category = FieldCategory::DomesticEnergy,
    is_offset = false,
    description = "Electricity drawn from the grid per billing period",
);

define_field!(
    FIELD_PIPED_GAS,
    name = "pipedGasScm",
    label = "Piped Gas (PNG)",
    unit = "SCM",
    category = FieldCategory::DomesticEnergy,
    is_offset = false,
    description = "Piped natural gas consumption in standard cubic meters",
);

define_field!(
    FIELD_CNG_CYLINDER,
    name = "cngCylinderKg",
    label = "CNG Cylinder",
    unit = "kg",
    category = FieldCategory::DomesticEnergy,
    is_offset = false,
    description = "Weight of domestic CNG cylinder fuel consumed",
);

// ============================================================================
// Transport
// ============================================================================

define_field!(
    FIELD_PETROL,
    name = "petrolLiters",
    label = "Petrol",
    unit = "L",
    category = FieldCategory::Transport,
    is_offset = false,
    description = "Petrol consumed by vehicles",
);

define_field!(
    FIELD_DIESEL,
    name = "dieselLiters",
    label = "Diesel",
    unit = "L",
    category = FieldCategory::Transport,
    is_offset = false,
    description = "Diesel consumed by vehicles",
);

define_field!(
    FIELD_CNG_VEHICLE,
    name = "cngVehicleKg",
    label = "CNG (Vehicle)",
    unit = "kg",
    category = FieldCategory::Transport,
    is_offset = false,
    description = "CNG consumed by vehicles",
);

// ============================================================================
// Green Assets
// ============================================================================

define_field!(
    FIELD_SOLAR_CAPACITY,
    name = "solarCapacityKwp",
    label = "Solar Capacity",
    unit = "kWp",
    category = FieldCategory::GreenAssets,
    is_offset = true,
    description = "Installed solar generation capacity",
);

define_field!(
    FIELD_TREE_COUNT,
    name = "treeCount",
    label = "Trees",
    unit = "1",
    category = FieldCategory::GreenAssets,
    is_offset = true,
    description = "Number of trees credited as offsetting assets",
);

/// A single reportable consumption quantity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsumptionField {
    GridElectricity,
    PipedGas,
    CngCylinder,
    Petrol,
    Diesel,
    CngVehicle,
    SolarCapacity,
    TreeCount,
}

impl ConsumptionField {
    /// All fields in form order.
    pub const ALL: [ConsumptionField; 8] = [
        ConsumptionField::GridElectricity,
        ConsumptionField::PipedGas,
        ConsumptionField::CngCylinder,
        ConsumptionField::Petrol,
        ConsumptionField::Diesel,
        ConsumptionField::CngVehicle,
        ConsumptionField::SolarCapacity,
        ConsumptionField::TreeCount,
    ];

    pub fn definition(&self) -> &'static FieldDefinition {
        match self {
            ConsumptionField::GridElectricity => &FIELD_GRID_ELECTRICITY,
            ConsumptionField::PipedGas => &FIELD_PIPED_GAS,
            ConsumptionField::CngCylinder => &FIELD_CNG_CYLINDER,
            ConsumptionField::Petrol => &FIELD_PETROL,
            ConsumptionField::Diesel => &FIELD_DIESEL,
            ConsumptionField::CngVehicle => &FIELD_CNG_VEHICLE,
            ConsumptionField::SolarCapacity => &FIELD_SOLAR_CAPACITY,
            ConsumptionField::TreeCount => &FIELD_TREE_COUNT,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    pub fn label(&self) -> &'static str {
        self.definition().label
    }

    pub fn unit(&self) -> &'static str {
        self.definition().unit
    }

    pub fn category(&self) -> FieldCategory {
        self.definition().category
    }

    pub fn description(&self) -> &'static str {
        self.definition().description
    }

    pub fn is_offset(&self) -> bool {
        self.definition().is_offset
    }

    /// Look up a field by its wire name
    pub fn from_name(name: &str) -> Option<ConsumptionField> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for ConsumptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for field in ConsumptionField::ALL {
            assert_eq!(ConsumptionField::from_name(field.name()), Some(field));
        }
        assert_eq!(ConsumptionField::from_name("gasPNG"), None);
    }

    #[test]
    fn categories_partition_fields() {
        let total: usize = FieldCategory::ALL.iter().map(|c| c.fields().count()).sum();
        assert_eq!(total, ConsumptionField::ALL.len());

        let transport: Vec<_> = FieldCategory::Transport.fields().collect();
        assert_eq!(
            transport,
            vec![
                ConsumptionField::Petrol,
                ConsumptionField::Diesel,
                ConsumptionField::CngVehicle
            ]
        );
    }

    #[test]
    fn only_green_assets_offset() {
        for field in ConsumptionField::ALL {
            assert_eq!(
                field.is_offset(),
                field.category() == FieldCategory::GreenAssets,
                "{field}"
            );
        }
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&ConsumptionField::CngVehicle).unwrap();
        assert_eq!(json, "\"cngVehicle\"");
        let json = serde_json::to_string(&FieldCategory::GreenAssets).unwrap();
        assert_eq!(json, "\"greenAssets\"");
    }
}
