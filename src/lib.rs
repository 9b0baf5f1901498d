//! Household carbon footprint estimation.
//!
//! Re-exports the calculator crate and the history crate under one name:
//!
//! ```
//! use footprint::{compute_emissions, ConsumptionInput, NeutralityStatus};
//!
//! let input = ConsumptionInput {
//!     grid_electricity_kwh: 10.0,
//!     solar_capacity_kwp: 5.0,
//!     ..ConsumptionInput::default()
//! };
//! let result = compute_emissions(&input);
//! assert!(matches!(result.status(), NeutralityStatus::Neutral { .. }));
//! ```

pub use footprint_core;
pub use footprint_history;

pub use footprint_core::assessor::{Assessment, Assessor};
pub use footprint_core::config::FootprintConfig;
pub use footprint_core::errors::{FootprintError, FootprintResult};
pub use footprint_core::summary::ResultSummary;
pub use footprint_core::{
    compute_emissions, ConsumptionInput, EmissionCalculator, EmissionFactors, EmissionResult,
    InputPolicy, NeutralityStatus, RawConsumptionForm,
};
pub use footprint_history::{CalculationRecord, HistoryError, HistoryStore, InMemoryHistory};
