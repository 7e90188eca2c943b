// ABOUTME: Macronutrient splitter converting a calorie target and percentage split into grams
// ABOUTME: Normalizes splits that do not sum to 100 and derives per-kilogram amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{EngineConfig, MacroEnergyConfig};
use nutricalc_core::coerce::{finite_or_zero, positive};
use nutricalc_core::models::MacroSplit;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One macronutrient's share of the calorie target
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroShare {
    /// Effective percentage after normalization
    pub percent: f64,
    /// Energy from this macronutrient (kcal)
    pub kcal: f64,
    /// Mass (g)
    pub grams: f64,
    /// Grams per kilogram of body weight
    pub grams_per_kg: Option<f64>,
}

/// Gram targets for a calorie target and percentage split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroResult {
    /// Calorie target the split was applied to (kcal)
    pub target_kcal: f64,
    /// Factor applied to the entered percentages (`100 / sum`)
    pub normalization_factor: f64,
    /// Carbohydrate share
    pub carbohydrate: MacroShare,
    /// Protein share
    pub protein: MacroShare,
    /// Fat share
    pub fat: MacroShare,
    /// Calorie target per kilogram of body weight
    pub kcal_per_kg: Option<f64>,
}

impl MacroResult {
    /// Sum of the three effective percentages
    #[must_use]
    pub fn total_percent(&self) -> f64 {
        self.carbohydrate.percent + self.protein.percent + self.fat.percent
    }
}

/// Pure calculator turning a calorie target into macronutrient grams
#[derive(Debug, Clone)]
pub struct MacronutrientSplitter {
    config: MacroEnergyConfig,
}

impl Default for MacronutrientSplitter {
    fn default() -> Self {
        Self::with_config(EngineConfig::global())
    }
}

impl MacronutrientSplitter {
    /// Splitter with explicit energy densities
    #[must_use]
    pub const fn new(config: MacroEnergyConfig) -> Self {
        Self { config }
    }

    /// Splitter using the macro section of an engine configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig<true>) -> Self {
        Self::new(config.macros.clone())
    }

    /// Split `target_kcal` by percentages, normalizing them to sum to 100
    ///
    /// A zero percentage sum is treated as 1, which leaves every share at 0.
    /// Negative or non-finite percentages count as 0.
    #[must_use]
    pub fn split(
        &self,
        target_kcal: f64,
        pct_carb: f64,
        pct_protein: f64,
        pct_fat: f64,
        weight_kg: f64,
    ) -> MacroResult {
        self.split_with(
            target_kcal,
            MacroSplit::new(pct_carb, pct_protein, pct_fat),
            weight_kg,
        )
    }

    /// Split `target_kcal` by a [`MacroSplit`]
    #[must_use]
    pub fn split_with(&self, target_kcal: f64, split: MacroSplit, weight_kg: f64) -> MacroResult {
        let target_kcal = finite_or_zero(target_kcal);
        let split = split.sanitized();

        let mut sum = split.total();
        if sum <= 0.0 {
            debug!("Macro percentages sum to zero, shares left at zero");
            sum = 1.0;
        }
        let normalization_factor = 100.0 / sum;
        let weight_kg = positive(Some(weight_kg));

        let share = |pct: f64, kcal_per_g: f64| {
            let percent = pct * normalization_factor;
            let kcal = target_kcal * percent / 100.0;
            let grams = kcal / kcal_per_g;
            MacroShare {
                percent,
                kcal,
                grams,
                grams_per_kg: weight_kg.map(|weight| grams / weight),
            }
        };

        MacroResult {
            target_kcal,
            normalization_factor,
            carbohydrate: share(split.carb_percent, self.config.carb_kcal_per_g),
            protein: share(split.protein_percent, self.config.protein_kcal_per_g),
            fat: share(split.fat_percent, self.config.fat_kcal_per_g),
            kcal_per_kg: weight_kg.map(|weight| target_kcal / weight),
        }
    }
}
