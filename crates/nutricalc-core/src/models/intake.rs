// ABOUTME: Food intake models for dietary recalls and menus
// ABOUTME: MacroValues, catalog FoodItem, and FoodEntry with quantity-scaled line totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coerce::{finite_or_zero, positive};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Energy and macronutrient amounts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroValues {
    /// Energy (kcal)
    #[serde(default)]
    pub kcal: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein_g: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat_g: f64,
    /// Carbohydrate (g)
    #[serde(default)]
    pub carb_g: f64,
}

impl MacroValues {
    /// Multiply every amount by `factor`
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            kcal: self.kcal * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carb_g: self.carb_g * factor,
        }
    }

    /// Copy with NaN and infinities replaced by zero
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            kcal: finite_or_zero(self.kcal),
            protein_g: finite_or_zero(self.protein_g),
            fat_g: finite_or_zero(self.fat_g),
            carb_g: finite_or_zero(self.carb_g),
        }
    }
}

impl Add for MacroValues {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carb_g: self.carb_g + rhs.carb_g,
        }
    }
}

impl AddAssign for MacroValues {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Row of the food-equivalents catalog (values per serving)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Catalog identifier
    pub id: String,
    /// Food name
    pub name: String,
    /// Food group (cereals, legumes, fruits, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Suggested quantity for one serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_quantity: Option<f64>,
    /// Unit of the suggested quantity (g, cup, piece, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Energy and macros for one serving
    #[serde(flatten)]
    pub per_serving: MacroValues,
}

/// One line of a dietary recall or menu
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Dish the food belongs to
    #[serde(default)]
    pub dish: String,
    /// Food label
    #[serde(default)]
    pub food: String,
    /// Servings (or grams, depending on `unit`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit label
    #[serde(default)]
    pub unit: String,
    /// Per-serving macros copied from the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_per_serving: Option<MacroValues>,
    /// Line totals typed by hand, used when the entry has no catalog base
    #[serde(default)]
    pub entered: MacroValues,
    /// Water contributed by this line (ml)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_ml: Option<f64>,
}

impl FoodEntry {
    /// Entry for a catalog food; a missing quantity means one serving
    #[must_use]
    pub fn from_catalog(item: &FoodItem, quantity: Option<f64>) -> Self {
        Self {
            food: item.name.clone(),
            quantity: Some(quantity.unwrap_or(1.0)),
            unit: item.unit.clone().unwrap_or_default(),
            base_per_serving: Some(item.per_serving),
            ..Self::default()
        }
    }

    /// Entry with hand-typed totals and no catalog base
    #[must_use]
    pub fn manual(food: impl Into<String>, totals: MacroValues) -> Self {
        Self {
            food: food.into(),
            entered: totals,
            ..Self::default()
        }
    }

    /// Set the dish label
    #[must_use]
    pub fn in_dish(mut self, dish: impl Into<String>) -> Self {
        self.dish = dish.into();
        self
    }

    /// Line totals for this entry
    ///
    /// With a catalog base, totals are `base x quantity` and a missing or
    /// non-positive quantity contributes nothing. Without a base, the typed
    /// totals are kept unchanged.
    #[must_use]
    pub fn line_totals(&self) -> MacroValues {
        match self.base_per_serving {
            Some(base) => positive(self.quantity)
                .map_or_else(MacroValues::default, |quantity| base.scale(quantity)),
            None => self.entered,
        }
        .sanitized()
    }
}
