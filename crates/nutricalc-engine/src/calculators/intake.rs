// ABOUTME: Daily intake aggregator summing dietary recall or menu entries into totals
// ABOUTME: Macro-derived calories, percentage of energy per macro, and per-kilogram ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{EngineConfig, MacroEnergyConfig};
use nutricalc_core::coerce::positive;
use nutricalc_core::models::{FoodEntry, GoalField, GoalMetrics, MacroValues};
use serde::{Deserialize, Serialize};

/// Daily totals for a list of food entries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct IntakeTotals {
    /// Number of entries aggregated
    pub entry_count: usize,
    /// Sum of line totals (explicit kcal and macro grams)
    pub totals: MacroValues,
    /// Water from entries that report it (ml); `None` when no entry does
    pub water_ml: Option<f64>,
    /// Protein grams x 4
    pub kcal_from_protein: f64,
    /// Fat grams x 9
    pub kcal_from_fat: f64,
    /// Carbohydrate grams x 4
    pub kcal_from_carb: f64,
    /// Larger of the explicit kcal total and the macro-derived kcal
    pub energy_base_kcal: f64,
    /// Protein share of energy (%)
    pub protein_percent: f64,
    /// Fat share of energy (%)
    pub fat_percent: f64,
    /// Carbohydrate share of energy (%)
    pub carb_percent: f64,
    /// Body weight used for per-kilogram ratios (kg)
    pub reference_weight_kg: Option<f64>,
    /// Energy base per kilogram
    pub kcal_per_kg: Option<f64>,
    /// Protein grams per kilogram
    pub protein_g_per_kg: Option<f64>,
    /// Fat grams per kilogram
    pub fat_g_per_kg: Option<f64>,
    /// Carbohydrate grams per kilogram
    pub carb_g_per_kg: Option<f64>,
}

impl IntakeTotals {
    /// Energy from the three macronutrients (kcal)
    #[must_use]
    pub fn macro_kcal(&self) -> f64 {
        self.kcal_from_protein + self.kcal_from_fat + self.kcal_from_carb
    }
}

impl GoalMetrics for IntakeTotals {
    fn goal_value(&self, field: GoalField) -> Option<f64> {
        match field {
            GoalField::WaterLiters => self.water_ml.map(|ml| ml / 1000.0),
            _ => None,
        }
    }
}

/// Pure aggregator of food entries into daily totals
#[derive(Debug, Clone)]
pub struct DailyIntakeAggregator {
    config: MacroEnergyConfig,
}

impl Default for DailyIntakeAggregator {
    fn default() -> Self {
        Self::with_config(EngineConfig::global())
    }
}

impl DailyIntakeAggregator {
    /// Aggregator with explicit energy densities
    #[must_use]
    pub const fn new(config: MacroEnergyConfig) -> Self {
        Self { config }
    }

    /// Aggregator using the macro section of an engine configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig<true>) -> Self {
        Self::new(config.macros.clone())
    }

    /// Sum entries into daily totals without per-kilogram ratios
    #[must_use]
    pub fn aggregate(&self, entries: &[FoodEntry]) -> IntakeTotals {
        self.aggregate_for_weight(entries, None)
    }

    /// Sum entries into daily totals, deriving per-kilogram ratios from `weight_kg`
    #[must_use]
    pub fn aggregate_for_weight(
        &self,
        entries: &[FoodEntry],
        weight_kg: Option<f64>,
    ) -> IntakeTotals {
        let mut totals = MacroValues::default();
        let mut water_ml: Option<f64> = None;
        for entry in entries {
            totals += entry.line_totals();
            if let Some(ml) = entry.water_ml.filter(|ml| ml.is_finite() && *ml >= 0.0) {
                *water_ml.get_or_insert(0.0) += ml;
            }
        }

        let kcal_from_protein = totals.protein_g * self.config.protein_kcal_per_g;
        let kcal_from_fat = totals.fat_g * self.config.fat_kcal_per_g;
        let kcal_from_carb = totals.carb_g * self.config.carb_kcal_per_g;
        let energy_base_kcal = totals
            .kcal
            .max(kcal_from_protein + kcal_from_fat + kcal_from_carb);

        let percent_of = |kcal: f64| {
            if energy_base_kcal > 0.0 {
                kcal * 100.0 / energy_base_kcal
            } else {
                0.0
            }
        };

        let reference_weight_kg = positive(weight_kg);
        let per_kg = |amount: f64| reference_weight_kg.map(|weight| amount / weight);

        IntakeTotals {
            entry_count: entries.len(),
            totals,
            water_ml,
            kcal_from_protein,
            kcal_from_fat,
            kcal_from_carb,
            energy_base_kcal,
            protein_percent: percent_of(kcal_from_protein),
            fat_percent: percent_of(kcal_from_fat),
            carb_percent: percent_of(kcal_from_carb),
            reference_weight_kg,
            kcal_per_kg: per_kg(energy_base_kcal),
            protein_g_per_kg: per_kg(totals.protein_g),
            fat_g_per_kg: per_kg(totals.fat_g),
            carb_g_per_kg: per_kg(totals.carb_g),
        }
    }
}
