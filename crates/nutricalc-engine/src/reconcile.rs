// ABOUTME: Optional reconciliation of segmental body-composition masses against totals
// ABOUTME: Reports segment sums, totals, differences, and tolerance checks for fat and muscle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Segmental reconciliation
//!
//! Segmental masses are entered independently of the totals and the analyzer
//! never cross-checks them. Callers that want the check invoke
//! [`reconcile_segments`] explicitly.

use nutricalc_core::coerce::positive;
use nutricalc_core::models::{BodyCompositionSample, SegmentalMasses};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Comparison of one set of segment masses against its total
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SegmentCheck {
    /// Number of segments with a recorded mass
    pub recorded_segments: usize,
    /// Sum of the recorded segments (kg)
    pub segment_sum_kg: Option<f64>,
    /// Total mass the segments are compared against (kg)
    pub total_kg: Option<f64>,
    /// `segment_sum_kg - total_kg`
    pub difference_kg: Option<f64>,
    /// Whether the absolute difference is within tolerance
    pub within_tolerance: Option<bool>,
}

impl SegmentCheck {
    fn compare(segments: &SegmentalMasses, total_kg: Option<f64>, tolerance_kg: f64) -> Self {
        let segment_sum_kg = segments.sum();
        let difference_kg = segment_sum_kg.zip(total_kg).map(|(sum, total)| sum - total);
        Self {
            recorded_segments: segments.recorded_count(),
            segment_sum_kg,
            total_kg,
            difference_kg,
            within_tolerance: difference_kg.map(|diff| diff.abs() <= tolerance_kg),
        }
    }
}

/// Result of reconciling a sample's segmental masses
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SegmentalReconciliation {
    /// Tolerance applied (kg)
    pub tolerance_kg: f64,
    /// Fat segments against total fat mass
    pub fat: SegmentCheck,
    /// Muscle segments against total muscle mass
    pub muscle: SegmentCheck,
}

impl SegmentalReconciliation {
    /// False only when a comparison was possible and fell outside tolerance
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.fat.within_tolerance != Some(false) && self.muscle.within_tolerance != Some(false)
    }
}

/// Compare segment sums with total fat and muscle mass
///
/// Total fat is the entered fat mass, or `weight x fat% / 100` when only the
/// percentage was entered. A negative or non-finite tolerance counts as 0.
#[must_use]
pub fn reconcile_segments(
    sample: &BodyCompositionSample,
    tolerance_kg: f64,
) -> SegmentalReconciliation {
    let tolerance_kg = if tolerance_kg.is_finite() {
        tolerance_kg.max(0.0)
    } else {
        0.0
    };

    let total_fat_kg = positive(sample.fat_mass_kg).or_else(|| {
        positive(sample.fat_percent)
            .zip(positive(sample.weight_kg))
            .map(|(pct, weight)| weight * pct / 100.0)
    });
    let total_muscle_kg = positive(sample.muscle_mass_kg);

    let reconciliation = SegmentalReconciliation {
        tolerance_kg,
        fat: SegmentCheck::compare(&sample.segmental_fat, total_fat_kg, tolerance_kg),
        muscle: SegmentCheck::compare(&sample.segmental_muscle, total_muscle_kg, tolerance_kg),
    };
    if !reconciliation.is_consistent() {
        debug!(
            fat_difference_kg = ?reconciliation.fat.difference_kg,
            muscle_difference_kg = ?reconciliation.muscle.difference_kg,
            tolerance_kg,
            "Segmental masses disagree with totals"
        );
    }
    reconciliation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(values: [f64; 5]) -> SegmentalMasses {
        SegmentalMasses {
            left_arm_kg: Some(values[0]),
            right_arm_kg: Some(values[1]),
            left_leg_kg: Some(values[2]),
            right_leg_kg: Some(values[3]),
            trunk_kg: Some(values[4]),
        }
    }

    #[test]
    fn test_consistent_sample() {
        let sample = BodyCompositionSample {
            weight_kg: Some(80.0),
            fat_mass_kg: Some(20.0),
            muscle_mass_kg: Some(35.0),
            segmental_fat: segments([1.5, 1.5, 3.5, 3.5, 10.0]),
            segmental_muscle: segments([3.0, 3.0, 9.0, 9.0, 11.2]),
            ..BodyCompositionSample::default()
        };
        let result = reconcile_segments(&sample, 0.5);
        assert!((result.fat.difference_kg.unwrap()).abs() < 1e-9);
        assert!((result.muscle.difference_kg.unwrap() - 0.2).abs() < 1e-9);
        assert_eq!(result.fat.within_tolerance, Some(true));
        assert_eq!(result.muscle.within_tolerance, Some(true));
        assert!(result.is_consistent());
    }

    #[test]
    fn test_inconsistent_fat_segments() {
        let sample = BodyCompositionSample {
            weight_kg: Some(80.0),
            fat_percent: Some(25.0),
            segmental_fat: segments([1.0, 1.0, 3.0, 3.0, 8.0]),
            ..BodyCompositionSample::default()
        };
        let result = reconcile_segments(&sample, 0.5);
        assert!((result.fat.total_kg.unwrap() - 20.0).abs() < 1e-9);
        assert!((result.fat.difference_kg.unwrap() + 4.0).abs() < 1e-9);
        assert_eq!(result.fat.within_tolerance, Some(false));
        assert!(!result.is_consistent());
    }

    #[test]
    fn test_nothing_to_compare() {
        let sample = BodyCompositionSample {
            fat_mass_kg: Some(20.0),
            ..BodyCompositionSample::default()
        };
        let result = reconcile_segments(&sample, -1.0);
        assert!(result.tolerance_kg.abs() < f64::EPSILON);
        assert_eq!(result.fat.segment_sum_kg, None);
        assert_eq!(result.fat.within_tolerance, None);
        assert_eq!(result.muscle.recorded_segments, 0);
        assert!(result.is_consistent());
    }
}
