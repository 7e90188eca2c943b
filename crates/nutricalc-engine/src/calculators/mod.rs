// ABOUTME: Pure calculators turning anthropometric and dietary inputs into clinical quantities
// ABOUTME: Energy, macronutrient split, body composition, daily intake, and goal deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculators
//!
//! Each calculator is stateless apart from its configuration. None of them
//! fail: missing or degenerate input yields `None` ("not computable") or zero
//! as documented per field.

/// Body-composition indices (BMI, fat and muscle percentages, fat excess)
pub mod body_composition;
/// BMR, thermic effect, total expenditure, calorie target
pub mod energy;
/// Signed deltas against treatment goals
pub mod goals;
/// Daily totals from recall or menu entries
pub mod intake;
/// Calorie target to macronutrient grams
pub mod macros;

pub use body_composition::{BodyCompositionAnalyzer, CompositionResult};
pub use energy::{EnergyExpenditureCalculator, EnergyResult};
pub use goals::{CurrentValues, GoalDeltaTracker, GoalDeltas};
pub use intake::{DailyIntakeAggregator, IntakeTotals};
pub use macros::{MacroResult, MacroShare, MacronutrientSplitter};
