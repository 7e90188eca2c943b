// ABOUTME: Whole-patient nutrition report running every calculator over one snapshot
// ABOUTME: Energy, macro split, latest body composition, intake totals, and goal deltas in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::models::{
    latest_sample, ActivityProfile, AnthropometricInput, BodyCompositionSample, EnergyAdjustment,
    FoodEntry, GoalTarget, MacroSplit, Sex,
};
use nutricalc_engine::calculators::{
    BodyCompositionAnalyzer, CompositionResult, CurrentValues, DailyIntakeAggregator,
    EnergyExpenditureCalculator, EnergyResult, GoalDeltaTracker, GoalDeltas, IntakeTotals,
    MacroResult, MacronutrientSplitter,
};
use nutricalc_engine::config::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything known about a patient at one consultation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientSnapshot {
    /// Anthropometrics measured at this consultation
    #[serde(default)]
    pub anthropometrics: AnthropometricInput,
    /// Activity profile
    #[serde(default)]
    pub activity: ActivityProfile,
    /// Calorie adjustment
    #[serde(default)]
    pub adjustment: EnergyAdjustment,
    /// Prescribed macronutrient split
    #[serde(default)]
    pub macro_split: MacroSplit,
    /// Body-composition samples, in any order
    #[serde(default)]
    pub composition_history: Vec<BodyCompositionSample>,
    /// Dietary recall or menu entries
    #[serde(default)]
    pub intake: Vec<FoodEntry>,
    /// Treatment goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<GoalTarget>,
    /// Average daily steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_steps: Option<f64>,
}

/// Derived values for one patient snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionReport {
    /// Energy expenditure and calorie target
    pub energy: EnergyResult,
    /// Macro grams for the calorie target (0 kcal when the target is not computable)
    pub macros: MacroResult,
    /// Body composition of the latest sample, or of the consultation anthropometrics
    pub composition: CompositionResult,
    /// Intake totals
    pub intake: IntakeTotals,
    /// Deltas against the goals; empty without goals
    pub goal_deltas: GoalDeltas,
}

impl NutritionReport {
    /// Build a report with the global engine configuration
    #[must_use]
    pub fn build(snapshot: &PatientSnapshot) -> Self {
        Self::build_with_config(snapshot, EngineConfig::global())
    }

    /// Build a report with an explicit engine configuration
    ///
    /// The body weight for per-kilogram values is the consultation weight,
    /// falling back to the latest composition sample's weight. A sample
    /// without a recorded sex takes the consultation's.
    #[must_use]
    #[instrument(skip_all, fields(intake_entries = snapshot.intake.len()))]
    pub fn build_with_config(snapshot: &PatientSnapshot, config: &EngineConfig<true>) -> Self {
        let energy = EnergyExpenditureCalculator::with_config(config).compute_for(
            &snapshot.anthropometrics,
            snapshot.activity,
            snapshot.adjustment,
        );

        let latest = latest_sample(&snapshot.composition_history);
        let mut sample = latest.cloned().unwrap_or_else(|| {
            debug!("No composition sample, using consultation anthropometrics");
            BodyCompositionSample::from_anthropometrics(&snapshot.anthropometrics, None, None)
        });
        if sample.sex == Sex::Unknown {
            sample.sex = snapshot.anthropometrics.sex;
        }
        let composition = BodyCompositionAnalyzer::with_config(config).analyze(&sample);

        let reference_weight_kg = snapshot
            .anthropometrics
            .weight_kg
            .filter(|w| w.is_finite() && *w > 0.0)
            .or(composition.weight_kg);

        let macros = MacronutrientSplitter::with_config(config).split_with(
            energy.target_kcal.unwrap_or(0.0),
            snapshot.macro_split,
            reference_weight_kg.unwrap_or(0.0),
        );

        let intake = DailyIntakeAggregator::with_config(config)
            .aggregate_for_weight(&snapshot.intake, reference_weight_kg);

        let goal_deltas = snapshot
            .goals
            .as_ref()
            .map(|goals| {
                let current = CurrentValues::default()
                    .merge(&composition)
                    .merge(&intake)
                    .with_daily_steps(snapshot.daily_steps);
                GoalDeltaTracker::delta(&current, goals)
            })
            .unwrap_or_default();

        Self {
            energy,
            macros,
            composition,
            intake,
            goal_deltas,
        }
    }
}
