// ABOUTME: Body-composition analyzer for BMI, fat and muscle percentages, and fat excess
// ABOUTME: Sex-specific ideal body-fat reference and parallel analysis of sample histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Analyzer
//!
//! Every derived index is recomputed from the sample on each call. Fat excess
//! is a signed quantity: a body-fat percentage below the ideal reference
//! yields a negative excess and a "weight without excess fat" above the
//! current weight.
//!
//! Segmental masses are passed through untouched. Comparing them against the
//! totals is a separate step, see [`crate::reconcile::reconcile_segments`].

use crate::config::{BodyCompositionConfig, EngineConfig};
use nutricalc_core::coerce::positive;
use nutricalc_core::models::{
    normalize_height_m, BodyCompositionSample, GoalField, GoalMetrics, SegmentalMasses, Sex,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived body-composition indices for one sample
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompositionResult {
    /// Sex used for the ideal fat reference
    pub sex: Sex,
    /// Body weight (kg)
    pub weight_kg: Option<f64>,
    /// Body mass index (kg/m^2)
    pub bmi: Option<f64>,
    /// Fat mass (kg), entered or derived from the percentage
    pub fat_mass_kg: Option<f64>,
    /// Body-fat percentage, entered or derived from the mass
    pub fat_percent: Option<f64>,
    /// Muscle mass (kg)
    pub muscle_mass_kg: Option<f64>,
    /// Muscle mass as a percentage of body weight
    pub muscle_percent: Option<f64>,
    /// Waist circumference / hip circumference
    pub waist_hip_ratio: Option<f64>,
    /// Ideal body-fat percentage for the sample's sex
    pub ideal_fat_percent: Option<f64>,
    /// Current minus ideal body-fat percentage (signed)
    pub fat_excess_percent: Option<f64>,
    /// Weight of the fat excess (signed, kg)
    pub fat_excess_kg: Option<f64>,
    /// Weight minus fat excess (kg)
    pub weight_without_excess_kg: Option<f64>,
    /// Total body water (litres)
    pub body_water_l: Option<f64>,
    /// Segmental fat masses as entered
    pub segmental_fat: SegmentalMasses,
    /// Segmental muscle masses as entered
    pub segmental_muscle: SegmentalMasses,
}

impl GoalMetrics for CompositionResult {
    fn goal_value(&self, field: GoalField) -> Option<f64> {
        match field {
            GoalField::WeightKg => self.weight_kg,
            GoalField::Bmi => self.bmi,
            GoalField::FatPercent => self.fat_percent,
            GoalField::MuscleMassKg => self.muscle_mass_kg,
            GoalField::FatMassKg => self.fat_mass_kg,
            GoalField::WaterLiters | GoalField::DailySteps => None,
        }
    }
}

/// Calculate BMI, defined only when weight and height are positive
#[must_use]
pub fn calculate_bmi(weight_kg: Option<f64>, height_m: Option<f64>) -> Option<f64> {
    let weight_kg = positive(weight_kg)?;
    let height_m = positive(height_m)?;
    Some(weight_kg / (height_m * height_m))
}

/// Calculate waist-hip ratio, defined only when both circumferences are positive
#[must_use]
pub fn calculate_waist_hip_ratio(waist_cm: Option<f64>, hip_cm: Option<f64>) -> Option<f64> {
    Some(positive(waist_cm)? / positive(hip_cm)?)
}

/// Pure analyzer deriving body-composition indices from a sample
#[derive(Debug, Clone)]
pub struct BodyCompositionAnalyzer {
    config: BodyCompositionConfig,
}

impl Default for BodyCompositionAnalyzer {
    fn default() -> Self {
        Self::with_config(EngineConfig::global())
    }
}

impl BodyCompositionAnalyzer {
    /// Analyzer with explicit reference values
    #[must_use]
    pub const fn new(config: BodyCompositionConfig) -> Self {
        Self { config }
    }

    /// Analyzer using the body-composition section of an engine configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig<true>) -> Self {
        Self::new(config.body_composition.clone())
    }

    /// Analyze one sample
    ///
    /// When only one of fat mass and fat percentage was entered, the other is
    /// derived from weight. When both were entered both are kept as entered.
    #[must_use]
    pub fn analyze(&self, sample: &BodyCompositionSample) -> CompositionResult {
        let weight_kg = positive(sample.weight_kg);
        let height_m = positive(sample.height_m).map(normalize_height_m);

        let entered_fat_kg = sample.fat_mass_kg.filter(|kg| kg.is_finite() && *kg >= 0.0);
        let entered_fat_pct = sample.fat_percent.filter(|pct| pct.is_finite() && *pct >= 0.0);
        let fat_mass_kg = entered_fat_kg.or_else(|| {
            entered_fat_pct
                .zip(weight_kg)
                .map(|(pct, weight)| weight * pct / 100.0)
        });
        let fat_percent = entered_fat_pct.or_else(|| {
            entered_fat_kg
                .zip(weight_kg)
                .map(|(kg, weight)| kg * 100.0 / weight)
        });

        let muscle_mass_kg = sample.muscle_mass_kg.filter(|kg| kg.is_finite() && *kg >= 0.0);
        let muscle_percent = muscle_mass_kg
            .zip(weight_kg)
            .map(|(kg, weight)| kg * 100.0 / weight);

        let ideal_fat_percent = self.config.ideal_fat_percent(sample.sex);
        if ideal_fat_percent.is_none() {
            debug!("Sex not recorded, ideal body-fat reference left undefined");
        }
        let fat_excess_percent = fat_percent
            .zip(ideal_fat_percent)
            .map(|(current, ideal)| current - ideal);
        let fat_excess_kg = fat_excess_percent
            .zip(weight_kg)
            .map(|(excess, weight)| weight * excess / 100.0);
        let weight_without_excess_kg = weight_kg
            .zip(fat_excess_kg)
            .map(|(weight, excess)| weight - excess);

        CompositionResult {
            sex: sample.sex,
            weight_kg,
            bmi: calculate_bmi(weight_kg, height_m),
            fat_mass_kg,
            fat_percent,
            muscle_mass_kg,
            muscle_percent,
            waist_hip_ratio: calculate_waist_hip_ratio(sample.waist_cm, sample.hip_cm),
            ideal_fat_percent,
            fat_excess_percent,
            fat_excess_kg,
            weight_without_excess_kg,
            body_water_l: positive(sample.body_water_l),
            segmental_fat: sample.segmental_fat,
            segmental_muscle: sample.segmental_muscle,
        }
    }

    /// Analyze a history of samples in parallel, preserving input order
    #[must_use]
    pub fn analyze_history(&self, history: &[BodyCompositionSample]) -> Vec<CompositionResult> {
        history.par_iter().map(|sample| self.analyze(sample)).collect()
    }
}
