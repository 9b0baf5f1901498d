//! Per-user history of footprint calculations.
//!
//! Each stored [`CalculationRecord`] pairs the [`ConsumptionInput`] a user
//! submitted with the [`EmissionResult`] it produced. Records are keyed by
//! user and timestamp; the calculator itself never sees this crate.
//!
//! [`ConsumptionInput`]: footprint_core::ConsumptionInput
//! [`EmissionResult`]: footprint_core::EmissionResult

pub mod record;
pub mod store;

pub mod errors;

pub use errors::{HistoryError, HistoryResult};
pub use record::CalculationRecord;
pub use store::{HistoryStore, InMemoryHistory};
