// ABOUTME: Benchmark fixtures generating realistic patient histories and dietary recalls
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic patient data.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{Days, NaiveDate};
use nutricalc::models::{
    BodyCompositionSample, FoodEntry, FoodItem, MacroValues, SegmentalMasses, Sex,
};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset (10 items) - one consultation
    Small,
    /// Medium dataset (100 items) - long-running patient
    Medium,
    /// Large dataset (1000 items) - clinic-wide batch
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }
}

/// Weekly bioimpedance samples for one patient, oldest first
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_composition_history(size: BatchSize) -> Vec<BodyCompositionSample> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1);
    (0..size.count())
        .map(|week| {
            let progress = week as f64;
            BodyCompositionSample {
                measured_on: start.and_then(|d| d.checked_add_days(Days::new(week as u64 * 7))),
                sex: if week % 2 == 0 { Sex::Male } else { Sex::Female },
                weight_kg: Some(0.05f64.mul_add(-progress, 92.0)),
                height_m: Some(1.76),
                waist_cm: Some(0.03f64.mul_add(-progress, 98.0)),
                hip_cm: Some(104.0),
                fat_percent: Some(0.02f64.mul_add(-progress, 31.0)),
                muscle_mass_kg: Some(0.01f64.mul_add(progress, 33.0)),
                body_water_l: Some(41.5),
                segmental_fat: SegmentalMasses {
                    left_arm_kg: Some(1.8),
                    right_arm_kg: Some(1.9),
                    left_leg_kg: Some(4.6),
                    right_leg_kg: Some(4.7),
                    trunk_kg: Some(15.2),
                },
                ..BodyCompositionSample::default()
            }
        })
        .collect()
}

/// Dietary recall mixing catalog-scaled and hand-typed lines
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_recall(size: BatchSize) -> Vec<FoodEntry> {
    let tortilla = FoodItem {
        id: "cer-001".to_owned(),
        name: "Tortilla de maíz".to_owned(),
        group: Some("cereales".to_owned()),
        suggested_quantity: Some(1.0),
        unit: Some("pieza".to_owned()),
        per_serving: MacroValues {
            kcal: 70.0,
            protein_g: 2.0,
            fat_g: 0.5,
            carb_g: 15.0,
        },
    };
    (0..size.count())
        .map(|index| {
            if index % 3 == 0 {
                FoodEntry::manual(
                    format!("Guisado {index}"),
                    MacroValues {
                        kcal: 180.0,
                        protein_g: 12.0,
                        fat_g: 9.0,
                        carb_g: 10.0,
                    },
                )
                .in_dish("Comida")
            } else {
                FoodEntry::from_catalog(&tortilla, Some((index % 4 + 1) as f64)).in_dish("Comida")
            }
        })
        .collect()
}
