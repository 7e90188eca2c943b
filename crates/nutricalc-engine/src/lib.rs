// ABOUTME: Nutrition and body-composition calculation engine
// ABOUTME: Calculators, segmental reconciliation, food catalog lookup, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutricalc Engine
//!
//! Pure numeric functions that turn a patient's anthropometric and dietary
//! inputs into derived clinical quantities. Calculators hold only their
//! configuration, so they are `Send + Sync` and can be shared freely.
//!
//! ## Modules
//!
//! - **calculators**: Energy, macronutrient split, body composition, intake, goal deltas
//! - **reconcile**: Explicit segmental-vs-total body-composition check
//! - **catalog**: Read-only food-equivalents lookup
//! - **config**: Engine configuration with env overrides and validation

/// Energy, macro, body-composition, intake, and goal calculators
pub mod calculators;

/// Read-only food-equivalents catalog
pub mod catalog;

/// Engine configuration
pub mod config;

/// Segmental body-composition reconciliation
pub mod reconcile;

pub use calculators::{
    BodyCompositionAnalyzer, CompositionResult, CurrentValues, DailyIntakeAggregator,
    EnergyExpenditureCalculator, EnergyResult, GoalDeltaTracker, GoalDeltas, IntakeTotals,
    MacroResult, MacroShare, MacronutrientSplitter,
};
pub use catalog::{FoodCatalog, InMemoryFoodCatalog};
pub use config::{ConfigError, EngineConfig};
pub use reconcile::{reconcile_segments, SegmentCheck, SegmentalReconciliation};
