// ABOUTME: Energy expenditure calculator using the Mifflin-St Jeor equation
// ABOUTME: BMR, thermic effect of food, activity-adjusted expenditure, and adjusted calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Expenditure Calculator
//!
//! Total expenditure is `BMR x activity_factor + TEF`, where the thermic
//! effect of food is taken from the raw BMR and added once after the
//! activity multiplier. The target then applies the deficit or surplus.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ActivityFactorsConfig, BmrConfig, EngineConfig, EnergyConfig};
use nutricalc_core::coerce::positive;
use nutricalc_core::models::{ActivityProfile, AnthropometricInput, EnergyAdjustment, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Energy expenditure for one consultation
///
/// `None` means "not computable": BMR needs positive weight, height and age,
/// and everything downstream inherits that.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: Option<f64>,
    /// Thermic effect of food (kcal/day)
    pub thermic_effect: Option<f64>,
    /// Activity multiplier used
    pub activity_factor: f64,
    /// BMR x activity factor (kcal/day)
    pub expenditure_without_tef: Option<f64>,
    /// Activity-adjusted expenditure plus TEF (kcal/day)
    pub total_expenditure: Option<f64>,
    /// Total expenditure after the deficit or surplus, never below 0 (kcal/day)
    pub target_kcal: Option<f64>,
    /// Target kcal per kilogram of body weight
    pub kcal_per_kg: Option<f64>,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// Unrecorded sex takes the female constant, as the consultation form does.
/// Returns `None` when weight, height or age is not positive. Negative
/// results are clamped to 0.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    config: &BmrConfig,
) -> Option<f64> {
    let (Some(weight_kg), Some(height_cm), Some(age_years)) = (
        positive(Some(weight_kg)),
        positive(Some(height_cm)),
        positive(Some(age_years)),
    ) else {
        debug!(weight_kg, height_cm, age_years, "Insufficient anthropometrics for BMR");
        return None;
    };

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female | Sex::Unknown => config.msj_female_constant,
    };

    let bmr = config.msj_age_coef.mul_add(
        age_years,
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + sex_constant;

    Some(bmr.max(0.0))
}

/// Calculate the thermic effect of food as a fixed fraction of BMR
#[must_use]
pub fn calculate_thermic_effect(bmr: f64, thermic_effect_ratio: f64) -> f64 {
    bmr * thermic_effect_ratio
}

/// Calculate total expenditure: `BMR x activity_factor + TEF`
#[must_use]
pub fn calculate_total_expenditure(
    bmr: f64,
    activity: ActivityProfile,
    factors: &ActivityFactorsConfig,
    thermic_effect_ratio: f64,
) -> f64 {
    bmr.mul_add(
        factors.factor(activity),
        calculate_thermic_effect(bmr, thermic_effect_ratio),
    )
}

/// Pure calculator for BMR, TEF, total expenditure and calorie target
#[derive(Debug, Clone)]
pub struct EnergyExpenditureCalculator {
    config: EnergyConfig,
}

impl Default for EnergyExpenditureCalculator {
    fn default() -> Self {
        Self::with_config(EngineConfig::global())
    }
}

impl EnergyExpenditureCalculator {
    /// Calculator with explicit energy settings
    #[must_use]
    pub const fn new(config: EnergyConfig) -> Self {
        Self { config }
    }

    /// Calculator using the energy section of an engine configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig<true>) -> Self {
        Self::new(config.energy.clone())
    }

    /// Compute energy expenditure from raw numbers
    ///
    /// Missing values should be passed as `0.0`; they make the result not
    /// computable instead of failing.
    #[must_use]
    pub fn compute(
        &self,
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        sex: Sex,
        activity: ActivityProfile,
        adjustment: EnergyAdjustment,
    ) -> EnergyResult {
        let activity_factor = self.config.activity_factors.factor(activity);
        let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age_years, sex, &self.config.bmr);

        let thermic_effect =
            bmr.map(|bmr| calculate_thermic_effect(bmr, self.config.thermic_effect_ratio));
        let expenditure_without_tef = bmr.map(|bmr| bmr * activity_factor);
        let total_expenditure = bmr.map(|bmr| {
            calculate_total_expenditure(
                bmr,
                activity,
                &self.config.activity_factors,
                self.config.thermic_effect_ratio,
            )
        });
        let target_kcal = total_expenditure.map(|total| (total + adjustment.signed_kcal()).max(0.0));
        let kcal_per_kg = target_kcal
            .zip(positive(Some(weight_kg)))
            .map(|(target, weight)| target / weight);

        EnergyResult {
            bmr,
            thermic_effect,
            activity_factor,
            expenditure_without_tef,
            total_expenditure,
            target_kcal,
            kcal_per_kg,
        }
    }

    /// Compute energy expenditure from a consultation's anthropometrics
    #[must_use]
    pub fn compute_for(
        &self,
        input: &AnthropometricInput,
        activity: ActivityProfile,
        adjustment: EnergyAdjustment,
    ) -> EnergyResult {
        self.compute(
            input.weight_kg.unwrap_or(0.0),
            input.height_cm().unwrap_or(0.0),
            input.age_years.unwrap_or(0.0),
            input.sex,
            activity,
            adjustment,
        )
    }
}
