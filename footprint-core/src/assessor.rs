//! Form submission handling.
//!
//! An [`Assessor`] turns a submitted [`RawConsumptionForm`] into an
//! [`Assessment`]: the coerced input, its [`EmissionResult`] and the name the
//! result is shown under. All behaviour is fixed by the [`FootprintConfig`]
//! given at construction.

use crate::calculator::{EmissionCalculator, InputPolicy};
use crate::config::FootprintConfig;
use crate::errors::FootprintResult;
use crate::input::{ConsumptionInput, RawConsumptionForm};
use crate::result::EmissionResult;
use crate::summary::ResultSummary;
use log::debug;

/// Name used when the form leaves it blank.
pub const DEFAULT_NAME: &str = "Your Home";

/// Sample household used in fixture mode.
pub fn fixture_input() -> ConsumptionInput {
    ConsumptionInput {
        grid_electricity_kwh: 420.0,
        piped_gas_scm: 25.0,
        petrol_liters: 55.0,
        solar_capacity_kwp: 2.0,
        tree_count: 8,
        ..ConsumptionInput::default()
    }
}

/// Outcome of assessing one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub name: String,
    pub input: ConsumptionInput,
    pub result: EmissionResult,
    /// Whether `input` came from the fixture rather than the form
    pub from_fixture: bool,
}

impl Assessment {
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_result(self.name.clone(), &self.result)
    }
}

#[derive(Debug, Clone)]
pub struct Assessor {
    calculator: EmissionCalculator,
    use_fixture_data: bool,
}

impl Assessor {
    pub fn new(config: &FootprintConfig) -> FootprintResult<Self> {
        Ok(Self {
            calculator: config.calculator()?,
            use_fixture_data: config.use_fixture_data,
        })
    }

    pub fn calculator(&self) -> &EmissionCalculator {
        &self.calculator
    }

    pub fn assess(&self, form: &RawConsumptionForm) -> FootprintResult<Assessment> {
        let name = form
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_NAME)
            .to_string();

        let (input, from_fixture) = if self.use_fixture_data && form.is_blank() {
            debug!("Blank submission for {name}, using fixture household");
            (fixture_input(), true)
        } else {
            let input = match self.calculator.policy() {
                InputPolicy::Forgiving => form.to_input(),
                InputPolicy::Strict => form.to_input_strict()?,
            };
            (input, false)
        };

        let result = self.calculator.calculate(&input)?;
        Ok(Assessment {
            name,
            input,
            result,
            from_fixture,
        })
    }
}
