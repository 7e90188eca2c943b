// ABOUTME: Macronutrient percentage split prescribed for a target calorie value
// ABOUTME: Raw percentages as entered; normalization to 100 happens in the splitter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coerce::finite_or_zero;
use serde::{Deserialize, Serialize};

/// Percentages of energy for carbohydrate, protein, and fat
///
/// The three values need not sum to 100.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Carbohydrate share (%)
    pub carb_percent: f64,
    /// Protein share (%)
    pub protein_percent: f64,
    /// Fat share (%)
    pub fat_percent: f64,
}

impl MacroSplit {
    /// Build a split from carbohydrate, protein, and fat percentages
    #[must_use]
    pub const fn new(carb_percent: f64, protein_percent: f64, fat_percent: f64) -> Self {
        Self {
            carb_percent,
            protein_percent,
            fat_percent,
        }
    }

    /// Copy with negative or non-finite shares replaced by zero
    #[must_use]
    pub fn sanitized(self) -> Self {
        let clean = |pct: f64| finite_or_zero(pct).max(0.0);
        Self {
            carb_percent: clean(self.carb_percent),
            protein_percent: clean(self.protein_percent),
            fat_percent: clean(self.fat_percent),
        }
    }

    /// Sum of the three shares as entered
    #[must_use]
    pub fn total(&self) -> f64 {
        self.carb_percent + self.protein_percent + self.fat_percent
    }
}
