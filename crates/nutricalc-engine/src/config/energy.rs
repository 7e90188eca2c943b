// ABOUTME: Energy expenditure configuration for BMR, activity factors, and thermic effect
// ABOUTME: Mifflin-St Jeor coefficients and the four-level activity multiplier table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Expenditure Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use nutricalc_core::constants::{activity, mifflin_st_jeor, THERMIC_EFFECT_RATIO};
use nutricalc_core::models::ActivityProfile;
use serde::{Deserialize, Serialize};

/// Energy expenditure configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers applied to BMR
    pub activity_factors: ActivityFactorsConfig,
    /// Thermic effect of food as a fraction of BMR
    #[serde(default = "default_thermic_effect_ratio")]
    pub thermic_effect_ratio: f64,
}

const fn default_thermic_effect_ratio() -> f64 {
    THERMIC_EFFECT_RATIO
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers applied to BMR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Very sedentary: 1.10
    pub very_sedentary: f64,
    /// Sedentary: 1.15
    pub sedentary: f64,
    /// Active: 1.20
    pub active: f64,
    /// Very active: 1.30
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier configured for `profile`
    #[must_use]
    pub const fn factor(&self, profile: ActivityProfile) -> f64 {
        match profile {
            ActivityProfile::VerySedentary => self.very_sedentary,
            ActivityProfile::Sedentary => self.sedentary,
            ActivityProfile::Active => self.active,
            ActivityProfile::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            very_sedentary: activity::VERY_SEDENTARY,
            sedentary: activity::SEDENTARY,
            active: activity::ACTIVE,
            very_active: activity::VERY_ACTIVE,
        }
    }
}
