// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference patients, and a small food catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutricalc`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use nutricalc::config::EngineConfig;
use nutricalc::models::{
    ActivityProfile, AnthropometricInput, BodyCompositionSample, EnergyAdjustment, MacroSplit,
    Sex,
};
use nutricalc::report::PatientSnapshot;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating-point assertions
pub const EPS: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are equal within [`EPS`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

/// Validated default configuration, independent of the environment
pub fn default_config() -> EngineConfig<true> {
    EngineConfig::default()
}

/// 70 kg, 170 cm, 30-year-old man
pub fn reference_male() -> AnthropometricInput {
    AnthropometricInput {
        weight_kg: Some(70.0),
        height: Some(170.0),
        sex: Sex::Male,
        age_years: Some(30.0),
        ..AnthropometricInput::default()
    }
}

/// 60 kg, 1.65 m, 40-year-old woman (height entered in metres)
pub fn reference_female() -> AnthropometricInput {
    AnthropometricInput {
        weight_kg: Some(60.0),
        height: Some(1.65),
        sex: Sex::Female,
        age_years: Some(40.0),
        waist_cm: Some(75.0),
        hip_cm: Some(100.0),
        ..AnthropometricInput::default()
    }
}

/// Bioimpedance sample with both fat mass and fat percentage entered
pub fn bioimpedance_sample(sex: Sex, weight_kg: f64, fat_percent: f64) -> BodyCompositionSample {
    BodyCompositionSample {
        sex,
        weight_kg: Some(weight_kg),
        height_m: Some(1.75),
        fat_percent: Some(fat_percent),
        ..BodyCompositionSample::default()
    }
}

/// Reference male at a sedentary maintenance consultation with a 50/20/30 split
pub fn maintenance_snapshot() -> PatientSnapshot {
    PatientSnapshot {
        anthropometrics: reference_male(),
        activity: ActivityProfile::Sedentary,
        adjustment: EnergyAdjustment::maintenance(),
        macro_split: MacroSplit::new(50.0, 20.0, 30.0),
        ..PatientSnapshot::default()
    }
}

/// Small food-equivalents catalog in the JSON shape the catalog loader reads
pub const CATALOG_JSON: &str = r#"[
    {"id": "cer-001", "name": "Tortilla de maíz", "group": "cereales", "suggested_quantity": 1,
     "unit": "pieza", "kcal": 70, "protein_g": 2, "fat_g": 0.5, "carb_g": 15},
    {"id": "cer-002", "name": "Arroz cocido", "group": "cereales", "suggested_quantity": 0.25,
     "unit": "taza", "kcal": 70, "protein_g": 2, "fat_g": 0, "carb_g": 15},
    {"id": "aoa-001", "name": "Pechuga de pollo", "group": "origen animal", "suggested_quantity": 30,
     "unit": "g", "kcal": 40, "protein_g": 7, "fat_g": 1, "carb_g": 0},
    {"id": "gra-001", "name": "Aguacate", "group": "grasas", "suggested_quantity": 0.33,
     "unit": "pieza", "kcal": 45, "protein_g": 0, "fat_g": 5, "carb_g": 0},
    {"id": "fru-001", "name": "Plátano", "group": "frutas", "suggested_quantity": 0.5,
     "unit": "pieza", "kcal": 60, "protein_g": 0, "fat_g": 0, "carb_g": 15}
]"#;
