//! Core types for household carbon footprint estimation.
//!
//! - [`calculator`]: the emission calculator and [`compute_emissions`]
//! - [`factors`]: the emission factor table
//! - [`input`]: typed consumption inputs and the raw form payload
//! - [`coerce`]: forgiving and strict text to number coercion
//! - [`result`]: calculation results and neutrality status
//! - [`summary`]: presentation rounding
//! - [`fields`], [`form`]: field metadata and form visibility state
//! - [`config`], [`assessor`]: configuration and submission handling

pub mod assessor;
pub mod calculator;
pub mod coerce;
pub mod config;
pub mod factors;
pub mod fields;
pub mod form;
pub mod input;
pub mod result;
pub mod summary;

pub mod errors;

/// Floating point type used for all physical quantities.
pub type FloatValue = f64;

pub use calculator::{compute_emissions, EmissionCalculator, InputPolicy};
pub use factors::EmissionFactors;
pub use input::{ConsumptionInput, RawConsumptionForm};
pub use result::{EmissionResult, NeutralityStatus, SourceBreakdown};
