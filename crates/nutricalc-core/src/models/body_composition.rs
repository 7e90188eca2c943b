// ABOUTME: Body-composition sample model with optional segmental fat and muscle masses
// ABOUTME: Bioimpedance (InBody-style) measurements plus helpers to pick the latest dated sample
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::anthropometrics::{AnthropometricInput, Sex};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body segment reported by segmental bioimpedance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BodySegment {
    /// Left arm
    LeftArm,
    /// Right arm
    RightArm,
    /// Left leg
    LeftLeg,
    /// Right leg
    RightLeg,
    /// Trunk
    Trunk,
}

impl BodySegment {
    /// All five segments
    pub const ALL: [Self; 5] = [
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
        Self::Trunk,
    ];
}

/// Per-segment masses (kg), each independently entered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SegmentalMasses {
    /// Left arm (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_arm_kg: Option<f64>,
    /// Right arm (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_arm_kg: Option<f64>,
    /// Left leg (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_leg_kg: Option<f64>,
    /// Right leg (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_leg_kg: Option<f64>,
    /// Trunk (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trunk_kg: Option<f64>,
}

impl SegmentalMasses {
    /// Mass recorded for one segment
    #[must_use]
    pub const fn get(&self, segment: BodySegment) -> Option<f64> {
        match segment {
            BodySegment::LeftArm => self.left_arm_kg,
            BodySegment::RightArm => self.right_arm_kg,
            BodySegment::LeftLeg => self.left_leg_kg,
            BodySegment::RightLeg => self.right_leg_kg,
            BodySegment::Trunk => self.trunk_kg,
        }
    }

    /// Segments paired with their recorded mass
    pub fn iter(&self) -> impl Iterator<Item = (BodySegment, Option<f64>)> + '_ {
        BodySegment::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// True when no segment was entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, mass)| mass.is_none())
    }

    /// Number of segments with a recorded mass
    #[must_use]
    pub fn recorded_count(&self) -> usize {
        self.iter().filter(|(_, mass)| mass.is_some()).count()
    }

    /// Sum of the recorded segments, `None` when nothing was entered
    #[must_use]
    pub fn sum(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().filter_map(|(_, mass)| mass).sum())
    }
}

/// A body-composition measurement (scale or bioimpedance device)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BodyCompositionSample {
    /// Measurement date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_on: Option<NaiveDate>,
    /// Biological sex (drives the ideal fat reference)
    #[serde(default)]
    pub sex: Sex,
    /// Body weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in metres (centimetre values are normalized)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    /// Waist circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Total fat mass (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_mass_kg: Option<f64>,
    /// Body-fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_percent: Option<f64>,
    /// Total skeletal muscle mass (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
    /// Total body water (litres)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_water_l: Option<f64>,
    /// Segmental fat masses
    #[serde(default)]
    pub segmental_fat: SegmentalMasses,
    /// Segmental muscle masses
    #[serde(default)]
    pub segmental_muscle: SegmentalMasses,
}

impl BodyCompositionSample {
    /// Build a sample from clinical-history anthropometrics plus indicator masses
    #[must_use]
    pub fn from_anthropometrics(
        input: &AnthropometricInput,
        fat_mass_kg: Option<f64>,
        muscle_mass_kg: Option<f64>,
    ) -> Self {
        Self {
            sex: input.sex,
            weight_kg: input.weight_kg,
            height_m: input.height_m(),
            waist_cm: input.waist_cm,
            hip_cm: input.hip_cm,
            fat_mass_kg,
            muscle_mass_kg,
            ..Self::default()
        }
    }
}

/// Most recent sample of a history
///
/// Dated samples win over undated ones; among equal dates the later entry wins.
#[must_use]
pub fn latest_sample(history: &[BodyCompositionSample]) -> Option<&BodyCompositionSample> {
    history.iter().max_by_key(|sample| sample.measured_on)
}
