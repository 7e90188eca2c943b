// ABOUTME: Macronutrient energy density, body-composition references, and catalog limits
// ABOUTME: Atwater factors, sex-specific ideal body-fat percentages, and search caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::constants::{atwater, body_fat, CATALOG_MAX_RESULTS};
use nutricalc_core::models::Sex;
use serde::{Deserialize, Serialize};

/// Energy density of each macronutrient (Atwater general factors)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroEnergyConfig {
    /// Carbohydrate kcal per gram (4)
    pub carb_kcal_per_g: f64,
    /// Protein kcal per gram (4)
    pub protein_kcal_per_g: f64,
    /// Fat kcal per gram (9)
    pub fat_kcal_per_g: f64,
}

impl Default for MacroEnergyConfig {
    fn default() -> Self {
        Self {
            carb_kcal_per_g: atwater::CARB_KCAL_PER_G,
            protein_kcal_per_g: atwater::PROTEIN_KCAL_PER_G,
            fat_kcal_per_g: atwater::FAT_KCAL_PER_G,
        }
    }
}

/// Body-composition reference values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Ideal body-fat percentage for men (25; 24 is also in clinical use)
    pub ideal_fat_percent_male: f64,
    /// Ideal body-fat percentage for women (31)
    pub ideal_fat_percent_female: f64,
    /// Allowed gap between segment sums and totals in segmental reconciliation (kg)
    pub segment_tolerance_kg: f64,
}

impl BodyCompositionConfig {
    /// Ideal body-fat reference for `sex`; unknown sex has no reference
    #[must_use]
    pub const fn ideal_fat_percent(&self, sex: Sex) -> Option<f64> {
        match sex {
            Sex::Male => Some(self.ideal_fat_percent_male),
            Sex::Female => Some(self.ideal_fat_percent_female),
            Sex::Unknown => None,
        }
    }
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self {
            ideal_fat_percent_male: body_fat::IDEAL_PERCENT_MALE,
            ideal_fat_percent_female: body_fat::IDEAL_PERCENT_FEMALE,
            segment_tolerance_kg: body_fat::SEGMENT_TOLERANCE_KG,
        }
    }
}

/// Food catalog lookup limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of matches returned by a search
    pub max_results: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_results: CATALOG_MAX_RESULTS,
        }
    }
}
