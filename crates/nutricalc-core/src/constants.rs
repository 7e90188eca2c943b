// ABOUTME: Physiological constants for energy, macronutrient, and body-composition formulas
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, Atwater factors, and validation ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants used by the calculation engine
//!
//! These are the defaults the engine configuration starts from. Every value that
//! a practice might want to tune is also exposed through the engine config; the
//! constants here are the documented baseline.

/// Mifflin-St Jeor resting energy equation
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// kcal per kilogram of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per centimetre of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (negative)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity multipliers applied to BMR
///
/// These are the practice's own factors (10/15/20/30 % above BMR), not the
/// `McArdle` sports-science table.
pub mod activity {
    /// Very sedentary: BMR x 1.10
    pub const VERY_SEDENTARY: f64 = 1.10;
    /// Sedentary: BMR x 1.15
    pub const SEDENTARY: f64 = 1.15;
    /// Active: BMR x 1.20
    pub const ACTIVE: f64 = 1.20;
    /// Very active: BMR x 1.30
    pub const VERY_ACTIVE: f64 = 1.30;
}

/// Thermic effect of food, as a fraction of BMR
pub const THERMIC_EFFECT_RATIO: f64 = 0.10;

/// Atwater energy factors (kcal per gram)
pub mod atwater {
    /// Carbohydrate
    pub const CARB_KCAL_PER_G: f64 = 4.0;
    /// Protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Reference body-fat percentages
pub mod body_fat {
    /// Ideal body-fat percentage for men.
    ///
    /// The body-composition form uses 25 %, a later variant uses 24 %.
    /// 25 is the documented default; override it via configuration.
    pub const IDEAL_PERCENT_MALE: f64 = 25.0;
    /// Alternative male reference observed in a later form variant
    pub const IDEAL_PERCENT_MALE_ALT: f64 = 24.0;
    /// Ideal body-fat percentage for women
    pub const IDEAL_PERCENT_FEMALE: f64 = 31.0;
    /// Default tolerance between segment sums and totals (kg)
    pub const SEGMENT_TOLERANCE_KG: f64 = 0.5;
}

/// Default cap on food catalog search results
pub const CATALOG_MAX_RESULTS: usize = 30;

/// Heights at or below this value are read as metres, above as centimetres
pub const HEIGHT_METRES_THRESHOLD: f64 = 3.0;

/// Ranges used by the opt-in strict validation at the input boundary
pub mod validation {
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum age accepted (years)
    pub const MIN_AGE_YEARS: f64 = 1.0;
    /// Maximum age accepted (years)
    pub const MAX_AGE_YEARS: f64 = 120.0;
    /// Maximum plausible circumference (cm)
    pub const MAX_CIRCUMFERENCE_CM: f64 = 300.0;
}
