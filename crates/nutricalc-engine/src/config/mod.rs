// ABOUTME: Engine configuration for energy, macronutrient, body-composition, and catalog settings
// ABOUTME: Orchestrates section configs and provides unified env-override loading and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Provides validated configuration for every calculator in the engine.
//!
//! # Module Structure
//!
//! - `energy` - BMR coefficients, activity factors, thermic effect
//! - `composition` - Macronutrient energy density, ideal body-fat references, catalog limits
//! - `error` - Configuration error types
//!
//! Loading starts from the documented defaults, applies `NUTRICALC_*`
//! environment overrides, then validates the result.

pub mod composition;
pub mod energy;
pub mod error;

pub use composition::{BodyCompositionConfig, CatalogConfig, MacroEnergyConfig};
pub use energy::{ActivityFactorsConfig, BmrConfig, EnergyConfig};
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig<true>> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig<const VALIDATED: bool = false> {
    /// Energy expenditure (BMR, activity factors, thermic effect)
    pub energy: EnergyConfig,
    /// Macronutrient energy density
    pub macros: MacroEnergyConfig,
    /// Body-composition reference values
    pub body_composition: BodyCompositionConfig,
    /// Food catalog lookup limits
    pub catalog: CatalogConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl EngineConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Callers that edit a configuration by hand should validate it before
    /// handing it to calculators.
    ///
    /// # Errors
    ///
    /// Returns the first rule the configuration breaks
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_energy()?;

        let macros = &self.macros;
        if macros.carb_kcal_per_g <= 0.0
            || macros.protein_kcal_per_g <= 0.0
            || macros.fat_kcal_per_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Macronutrient kcal per gram must be positive",
            ));
        }

        let composition = &self.body_composition;
        for ideal in [
            composition.ideal_fat_percent_male,
            composition.ideal_fat_percent_female,
        ] {
            if ideal <= 0.0 || ideal >= 60.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Ideal body-fat percentage must be between 0 and 60",
                ));
            }
        }
        if composition.segment_tolerance_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Segment tolerance must be zero or positive",
            ));
        }

        if self.catalog.max_results == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Catalog max_results must be at least 1",
            ));
        }

        Ok(())
    }

    /// Reject NaN and infinite values before any range check
    ///
    /// Every range comparison is false for NaN, so this runs first.
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let energy = &self.energy;
        let bmr = &energy.bmr;
        let factors = &energy.activity_factors;
        let values = [
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
            factors.very_sedentary,
            factors.sedentary,
            factors.active,
            factors.very_active,
            energy.thermic_effect_ratio,
            self.macros.carb_kcal_per_g,
            self.macros.protein_kcal_per_g,
            self.macros.fat_kcal_per_g,
            self.body_composition.ideal_fat_percent_male,
            self.body_composition.ideal_fat_percent_female,
            self.body_composition.segment_tolerance_kg,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Configuration values must be finite numbers",
            ));
        }
        Ok(())
    }

    /// Validate energy configuration
    fn validate_energy(&self) -> Result<(), ConfigError> {
        let energy = &self.energy;

        // Validate BMR coefficients are positive
        if energy.bmr.msj_weight_coef <= 0.0 || energy.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if energy.bmr.msj_age_coef >= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must be negative",
            ));
        }

        // Men carry the larger sex constant
        if energy.bmr.msj_male_constant <= energy.bmr.msj_female_constant {
            return Err(ConfigError::InvalidRange(
                "BMR male constant must exceed the female constant",
            ));
        }

        // Validate activity factors are within [1.0, 2.5] and ascending
        let factors = &energy.activity_factors;
        if factors.very_sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.very_sedentary >= factors.sedentary
            || factors.sedentary >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if !(0.0..1.0).contains(&energy.thermic_effect_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "Thermic effect ratio must be in [0, 1)",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMR coefficients
        Self::apply_env_var(
            "NUTRICALC_BMR_WEIGHT_COEF",
            &mut self.energy.bmr.msj_weight_coef,
        )?;
        Self::apply_env_var(
            "NUTRICALC_BMR_HEIGHT_COEF",
            &mut self.energy.bmr.msj_height_coef,
        )?;
        Self::apply_env_var("NUTRICALC_BMR_AGE_COEF", &mut self.energy.bmr.msj_age_coef)?;
        Self::apply_env_var(
            "NUTRICALC_BMR_MALE_CONSTANT",
            &mut self.energy.bmr.msj_male_constant,
        )?;
        Self::apply_env_var(
            "NUTRICALC_BMR_FEMALE_CONSTANT",
            &mut self.energy.bmr.msj_female_constant,
        )?;

        // Activity factors
        Self::apply_env_var(
            "NUTRICALC_ACTIVITY_VERY_SEDENTARY",
            &mut self.energy.activity_factors.very_sedentary,
        )?;
        Self::apply_env_var(
            "NUTRICALC_ACTIVITY_SEDENTARY",
            &mut self.energy.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRICALC_ACTIVITY_ACTIVE",
            &mut self.energy.activity_factors.active,
        )?;
        Self::apply_env_var(
            "NUTRICALC_ACTIVITY_VERY_ACTIVE",
            &mut self.energy.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "NUTRICALC_THERMIC_EFFECT_RATIO",
            &mut self.energy.thermic_effect_ratio,
        )?;

        // Macronutrient energy density
        Self::apply_env_var(
            "NUTRICALC_CARB_KCAL_PER_G",
            &mut self.macros.carb_kcal_per_g,
        )?;
        Self::apply_env_var(
            "NUTRICALC_PROTEIN_KCAL_PER_G",
            &mut self.macros.protein_kcal_per_g,
        )?;
        Self::apply_env_var("NUTRICALC_FAT_KCAL_PER_G", &mut self.macros.fat_kcal_per_g)?;

        // Body composition
        Self::apply_env_var(
            "NUTRICALC_IDEAL_FAT_PERCENT_MALE",
            &mut self.body_composition.ideal_fat_percent_male,
        )?;
        Self::apply_env_var(
            "NUTRICALC_IDEAL_FAT_PERCENT_FEMALE",
            &mut self.body_composition.ideal_fat_percent_female,
        )?;
        Self::apply_env_var(
            "NUTRICALC_SEGMENT_TOLERANCE_KG",
            &mut self.body_composition.segment_tolerance_kg,
        )?;

        // Catalog
        Self::apply_env_var(
            "NUTRICALC_CATALOG_MAX_RESULTS",
            &mut self.catalog.max_results,
        )?;

        Ok(self)
    }
}

impl Default for EngineConfig<true> {
    fn default() -> Self {
        Self {
            energy: EnergyConfig::default(),
            macros: MacroEnergyConfig::default(),
            body_composition: BodyCompositionConfig::default(),
            catalog: CatalogConfig::default(),
            _phantom: PhantomData,
        }
    }
}
