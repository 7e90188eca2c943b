// ABOUTME: Treatment goal targets and the trait that exposes current values for comparison
// ABOUTME: GoalTarget, GoalField, and GoalMetrics used by the goal delta tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quantity that can carry a treatment goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GoalField {
    /// Body weight (kg)
    WeightKg,
    /// Body mass index
    Bmi,
    /// Body-fat percentage
    FatPercent,
    /// Muscle mass (kg)
    MuscleMassKg,
    /// Fat mass (kg)
    FatMassKg,
    /// Water (litres)
    WaterLiters,
    /// Daily steps
    DailySteps,
}

impl GoalField {
    /// Every goal field, in reporting order
    pub const ALL: [Self; 7] = [
        Self::WeightKg,
        Self::Bmi,
        Self::FatPercent,
        Self::MuscleMassKg,
        Self::FatMassKg,
        Self::WaterLiters,
        Self::DailySteps,
    ];
}

/// Source of current values that can be compared against goals
pub trait GoalMetrics {
    /// Current value for `field`, or `None` when this source does not know it
    fn goal_value(&self, field: GoalField) -> Option<f64>;
}

/// Stored treatment targets for a patient
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalTarget {
    /// Date the goals were set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_on: Option<NaiveDate>,
    /// Target weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Target BMI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Target body-fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_percent: Option<f64>,
    /// Target muscle mass (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
    /// Target fat mass (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_mass_kg: Option<f64>,
    /// Target water volume (litres)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_l: Option<f64>,
    /// Target daily steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_steps: Option<f64>,
    /// Free-text goals
    #[serde(default)]
    pub notes: String,
}

impl GoalTarget {
    /// Stored target for `field`
    #[must_use]
    pub const fn target(&self, field: GoalField) -> Option<f64> {
        match field {
            GoalField::WeightKg => self.weight_kg,
            GoalField::Bmi => self.bmi,
            GoalField::FatPercent => self.fat_percent,
            GoalField::MuscleMassKg => self.muscle_mass_kg,
            GoalField::FatMassKg => self.fat_mass_kg,
            GoalField::WaterLiters => self.water_l,
            GoalField::DailySteps => self.daily_steps,
        }
    }
}

/// A target is itself a source of values, e.g. to compare two goal revisions
impl GoalMetrics for GoalTarget {
    fn goal_value(&self, field: GoalField) -> Option<f64> {
        self.target(field)
    }
}
