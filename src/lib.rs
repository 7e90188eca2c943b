// ABOUTME: Main library entry point for the nutrition and body-composition engine
// ABOUTME: Re-exports the core models and engine calculators, plus logging and patient reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutricalc
//!
//! Calculation engine behind a nutrition clinic's patient record: energy
//! expenditure, macronutrient targets, body composition, daily intake
//! totals, and progress against treatment goals.
//!
//! ## Features
//!
//! - **Energy**: Mifflin-St Jeor BMR, activity factor, thermic effect, calorie target
//! - **Macros**: Percentage split normalized to 100, grams and grams per kilogram
//! - **Body composition**: BMI, waist-hip ratio, fat and muscle indices, ideal fat excess
//! - **Intake**: Dietary recall totals with percentage of energy per macronutrient
//! - **Goals**: Signed current-minus-target deltas
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nutricalc::models::{ActivityProfile, AnthropometricInput, EnergyAdjustment, Sex};
//! use nutricalc::calculators::EnergyExpenditureCalculator;
//!
//! let input = AnthropometricInput {
//!     weight_kg: Some(70.0),
//!     height: Some(170.0),
//!     sex: Sex::Male,
//!     age_years: Some(30.0),
//!     ..AnthropometricInput::default()
//! };
//! let energy = EnergyExpenditureCalculator::default().compute_for(
//!     &input,
//!     ActivityProfile::Sedentary,
//!     EnergyAdjustment::deficit(500.0),
//! );
//! println!("Target: {:?} kcal", energy.target_kcal);
//! ```

/// Logging configuration and structured logging setup
pub mod logging;

/// Whole-patient nutrition report
pub mod report;

pub use nutricalc_core::{coerce, constants, errors, models};
pub use nutricalc_core::{AppError, AppResult, ErrorCode};
pub use nutricalc_engine::{calculators, catalog, config, reconcile};
pub use nutricalc_engine::{
    reconcile_segments, BodyCompositionAnalyzer, CompositionResult, DailyIntakeAggregator,
    EngineConfig, EnergyExpenditureCalculator, EnergyResult, FoodCatalog, GoalDeltaTracker,
    GoalDeltas, InMemoryFoodCatalog, IntakeTotals, MacroResult, MacronutrientSplitter,
};
pub use report::{NutritionReport, PatientSnapshot};
