// ABOUTME: Domain value objects consumed and produced by the calculation engine
// ABOUTME: Anthropometrics, body-composition samples, food entries, and goal targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Every model here is an immutable snapshot of a form or stored record. The
//! engine reads them and never mutates or retains them. Numeric fields that a
//! clinician may leave blank are `Option<f64>`; `None` means "not entered".

mod anthropometrics;
mod body_composition;
mod goals;
mod intake;
mod macro_split;

pub use anthropometrics::{
    normalize_height_m, ActivityProfile, AdjustmentMode, AnthropometricInput, EnergyAdjustment,
    Sex,
};
pub use body_composition::{latest_sample, BodyCompositionSample, BodySegment, SegmentalMasses};
pub use goals::{GoalField, GoalMetrics, GoalTarget};
pub use intake::{FoodEntry, FoodItem, MacroValues};
pub use macro_split::MacroSplit;
