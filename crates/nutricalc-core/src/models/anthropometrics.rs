// ABOUTME: Anthropometric input, sex, activity profile, and energy adjustment models
// ABOUTME: Includes lossy parsing of form labels and opt-in strict range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coerce::positive;
use crate::constants::{activity, validation, HEIGHT_METRES_THRESHOLD};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Biological sex used by sex-dependent formulas
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (Mifflin-St Jeor +5, male ideal fat reference)
    Male,
    /// Female (Mifflin-St Jeor -161, female ideal fat reference)
    Female,
    /// Not recorded; sex-dependent outputs stay undefined
    #[default]
    Unknown,
}

impl Sex {
    /// Parse sex from a form label, defaulting to `Unknown`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "hombre" | "h" => Self::Male,
            "female" | "f" | "mujer" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// Physical activity category
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityProfile {
    /// Very sedentary (x1.10)
    VerySedentary,
    /// Sedentary (x1.15)
    #[default]
    Sedentary,
    /// Active (x1.20)
    Active,
    /// Very active (x1.30)
    VeryActive,
}

impl ActivityProfile {
    /// All profiles in ascending order of activity
    pub const ALL: [Self; 4] = [
        Self::VerySedentary,
        Self::Sedentary,
        Self::Active,
        Self::VeryActive,
    ];

    /// Parse an activity label; unrecognised labels fall back to `Sedentary`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "very_sedentary" | "muy_sedentario" => Self::VerySedentary,
            "active" | "activo" => Self::Active,
            "very_active" | "muy_activo" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }

    /// Built-in multiplicative factor for this profile
    #[must_use]
    pub const fn default_factor(self) -> f64 {
        match self {
            Self::VerySedentary => activity::VERY_SEDENTARY,
            Self::Sedentary => activity::SEDENTARY,
            Self::Active => activity::ACTIVE,
            Self::VeryActive => activity::VERY_ACTIVE,
        }
    }
}

/// Direction of the calorie adjustment applied to total expenditure
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentMode {
    /// Target equals total expenditure
    #[default]
    Maintenance,
    /// Subtract the magnitude
    Deficit,
    /// Add the magnitude
    Surplus,
}

impl AdjustmentMode {
    /// Parse an adjustment label; unrecognised labels fall back to `Maintenance`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "deficit" | "déficit" => Self::Deficit,
            "surplus" | "superavit" | "superávit" => Self::Surplus,
            _ => Self::Maintenance,
        }
    }
}

/// Calorie adjustment (deficit, surplus, or none)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergyAdjustment {
    /// Adjustment direction
    pub mode: AdjustmentMode,
    /// Magnitude in kcal; negative or non-finite values count as 0
    pub magnitude_kcal: f64,
}

impl EnergyAdjustment {
    /// No adjustment
    #[must_use]
    pub const fn maintenance() -> Self {
        Self {
            mode: AdjustmentMode::Maintenance,
            magnitude_kcal: 0.0,
        }
    }

    /// Subtract `kcal` from total expenditure
    #[must_use]
    pub const fn deficit(kcal: f64) -> Self {
        Self {
            mode: AdjustmentMode::Deficit,
            magnitude_kcal: kcal,
        }
    }

    /// Add `kcal` to total expenditure
    #[must_use]
    pub const fn surplus(kcal: f64) -> Self {
        Self {
            mode: AdjustmentMode::Surplus,
            magnitude_kcal: kcal,
        }
    }

    /// Signed kcal delta to add to total expenditure
    #[must_use]
    pub fn signed_kcal(&self) -> f64 {
        let magnitude = positive(Some(self.magnitude_kcal)).unwrap_or(0.0);
        match self.mode {
            AdjustmentMode::Maintenance => 0.0,
            AdjustmentMode::Deficit => -magnitude,
            AdjustmentMode::Surplus => magnitude,
        }
    }
}

/// Convert a height given in metres or centimetres to metres
///
/// Values at or below 3.0 are already metres; larger values are centimetres.
#[must_use]
pub fn normalize_height_m(height: f64) -> f64 {
    if height <= HEIGHT_METRES_THRESHOLD {
        height
    } else {
        height / 100.0
    }
}

/// `0 < value <= max`, false for NaN
fn within_open_closed(value: f64, max: f64) -> bool {
    value > 0.0 && value <= max
}

/// Anthropometric measurements taken at a consultation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnthropometricInput {
    /// Body weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in metres or centimetres (see [`normalize_height_m`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Waist circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Abdominal circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abdominal_cm: Option<f64>,
    /// Biological sex
    #[serde(default)]
    pub sex: Sex,
    /// Age (years)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<f64>,
}

impl AnthropometricInput {
    /// Height in centimetres, when a positive height was entered
    #[must_use]
    pub fn height_cm(&self) -> Option<f64> {
        self.height_m().map(|m| m * 100.0)
    }

    /// Height in metres, when a positive height was entered
    #[must_use]
    pub fn height_m(&self) -> Option<f64> {
        positive(self.height).map(normalize_height_m)
    }

    /// Strict range validation for callers that want to reject implausible input
    ///
    /// Only present fields are checked. The calculators never call this: they
    /// degrade gracefully instead.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for the first field outside its plausible range
    pub fn validate_ranges(&self) -> AppResult<()> {
        if let Some(weight) = self.weight_kg {
            if !within_open_closed(weight, validation::MAX_WEIGHT_KG) {
                return Err(AppError::value_out_of_range(format!(
                    "Weight must be between 0 and {} kg",
                    validation::MAX_WEIGHT_KG
                )));
            }
        }
        if let Some(height) = self.height {
            let height_cm = normalize_height_m(height) * 100.0;
            if !within_open_closed(height_cm, validation::MAX_HEIGHT_CM) {
                return Err(AppError::value_out_of_range(format!(
                    "Height must be between 0 and {} cm",
                    validation::MAX_HEIGHT_CM
                )));
            }
        }
        if let Some(age) = self.age_years {
            if !(validation::MIN_AGE_YEARS..=validation::MAX_AGE_YEARS).contains(&age) {
                return Err(AppError::value_out_of_range(format!(
                    "Age must be between {} and {} years",
                    validation::MIN_AGE_YEARS,
                    validation::MAX_AGE_YEARS
                )));
            }
        }
        for (name, value) in [
            ("Waist", self.waist_cm),
            ("Hip", self.hip_cm),
            ("Abdominal", self.abdominal_cm),
        ] {
            if let Some(cm) = value {
                if !within_open_closed(cm, validation::MAX_CIRCUMFERENCE_CM) {
                    return Err(AppError::value_out_of_range(format!(
                        "{name} circumference must be between 0 and {} cm",
                        validation::MAX_CIRCUMFERENCE_CM
                    )));
                }
            }
        }
        Ok(())
    }
}
