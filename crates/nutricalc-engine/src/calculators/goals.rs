// ABOUTME: Goal delta tracker comparing current values against stored treatment targets
// ABOUTME: Signed current-minus-target deltas, omitting fields missing on either side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::models::{GoalField, GoalMetrics, GoalTarget};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Signed deltas (`current - target`) keyed by goal field
///
/// A field is absent when either side had no value; a present `0.0` means
/// the goal is met exactly.
pub type GoalDeltas = BTreeMap<GoalField, f64>;

/// Current values merged from several sources
///
/// The first source to provide a field wins; later sources only fill gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentValues {
    values: BTreeMap<GoalField, f64>,
}

impl CurrentValues {
    /// Fill missing fields from `source`
    #[must_use]
    pub fn merge<M: GoalMetrics + ?Sized>(mut self, source: &M) -> Self {
        for field in GoalField::ALL {
            if let Some(value) = source.goal_value(field).filter(|v| v.is_finite()) {
                self.values.entry(field).or_insert(value);
            }
        }
        self
    }

    /// Set daily steps, replacing any value already present
    #[must_use]
    pub fn with_daily_steps(mut self, steps: Option<f64>) -> Self {
        if let Some(steps) = steps.filter(|s| s.is_finite() && *s >= 0.0) {
            self.values.insert(GoalField::DailySteps, steps);
        }
        self
    }

    /// Set one field directly, replacing any value already present
    pub fn set(&mut self, field: GoalField, value: f64) {
        self.values.insert(field, value);
    }

    /// True when no source contributed any value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl GoalMetrics for CurrentValues {
    fn goal_value(&self, field: GoalField) -> Option<f64> {
        self.values.get(&field).copied()
    }
}

/// Compares current values against treatment targets
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalDeltaTracker;

impl GoalDeltaTracker {
    /// Signed `current - target` for every field present on both sides
    #[must_use]
    pub fn delta<M: GoalMetrics + ?Sized>(current: &M, target: &GoalTarget) -> GoalDeltas {
        GoalField::ALL
            .into_iter()
            .filter_map(|field| {
                let current = current.goal_value(field).filter(|v| v.is_finite())?;
                let target = target.target(field).filter(|v| v.is_finite())?;
                Some((field, current - target))
            })
            .collect()
    }
}
