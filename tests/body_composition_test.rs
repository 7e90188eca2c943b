// ABOUTME: Integration tests for body-composition analysis and segmental reconciliation
// ABOUTME: Validates BMI, fat excess, latest-sample selection, and segment-vs-total checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{
    assert_close, bioimpedance_sample, default_config, init_test_logging, reference_female,
};
use nutricalc::calculators::BodyCompositionAnalyzer;
use nutricalc::models::{
    latest_sample, BodyCompositionSample, BodySegment, SegmentalMasses, Sex,
};
use nutricalc::reconcile::reconcile_segments;

fn analyzer() -> BodyCompositionAnalyzer {
    BodyCompositionAnalyzer::with_config(&default_config())
}

// ============================================================================
// Composition indices
// ============================================================================

#[test]
fn test_male_fat_excess_against_reference() {
    init_test_logging();
    let result = analyzer().analyze(&bioimpedance_sample(Sex::Male, 90.0, 30.0));

    assert_close(result.bmi.unwrap(), 90.0 / (1.75 * 1.75));
    assert_close(result.fat_mass_kg.unwrap(), 27.0);
    assert_close(result.ideal_fat_percent.unwrap(), 25.0);
    assert_close(result.fat_excess_percent.unwrap(), 5.0);
    assert_close(result.fat_excess_kg.unwrap(), 4.5);
    assert_close(result.weight_without_excess_kg.unwrap(), 85.5);
}

#[test]
fn test_female_sample_from_consultation() {
    let sample = BodyCompositionSample::from_anthropometrics(
        &reference_female(),
        Some(18.6),
        Some(22.8),
    );
    let result = analyzer().analyze(&sample);

    assert_close(result.waist_hip_ratio.unwrap(), 0.75);
    assert_close(result.fat_percent.unwrap(), 31.0);
    assert_close(result.fat_excess_percent.unwrap(), 0.0);
    assert_close(result.muscle_percent.unwrap(), 38.0);
    assert_close(result.bmi.unwrap(), 60.0 / (1.65 * 1.65));
}

#[test]
fn test_weight_missing_keeps_entered_values_only() {
    let result = analyzer().analyze(&BodyCompositionSample {
        sex: Sex::Male,
        fat_percent: Some(28.0),
        muscle_mass_kg: Some(30.0),
        ..BodyCompositionSample::default()
    });

    assert_eq!(result.bmi, None);
    assert_eq!(result.fat_mass_kg, None);
    assert_close(result.fat_percent.unwrap(), 28.0);
    assert_close(result.fat_excess_percent.unwrap(), 3.0);
    assert_eq!(result.fat_excess_kg, None);
    assert_eq!(result.muscle_percent, None);
}

#[test]
fn test_latest_sample_is_selected_by_date() {
    let history = vec![
        BodyCompositionSample {
            measured_on: NaiveDate::from_ymd_opt(2025, 2, 1),
            weight_kg: Some(81.0),
            ..BodyCompositionSample::default()
        },
        BodyCompositionSample {
            measured_on: NaiveDate::from_ymd_opt(2025, 4, 1),
            weight_kg: Some(78.5),
            ..BodyCompositionSample::default()
        },
        BodyCompositionSample {
            measured_on: NaiveDate::from_ymd_opt(2025, 3, 1),
            weight_kg: Some(79.8),
            ..BodyCompositionSample::default()
        },
        BodyCompositionSample {
            weight_kg: Some(100.0),
            ..BodyCompositionSample::default()
        },
    ];

    let latest = latest_sample(&history).unwrap();
    assert_eq!(latest.weight_kg, Some(78.5));
    assert!(latest_sample(&[]).is_none());

    let results = analyzer().analyze_history(&history);
    assert_eq!(results.len(), 4);
    assert_eq!(results[1].weight_kg, Some(78.5));
}

// ============================================================================
// Segmental reconciliation
// ============================================================================

fn masses(left_arm: f64, right_arm: f64, left_leg: f64, right_leg: f64, trunk: f64) -> SegmentalMasses {
    SegmentalMasses {
        left_arm_kg: Some(left_arm),
        right_arm_kg: Some(right_arm),
        left_leg_kg: Some(left_leg),
        right_leg_kg: Some(right_leg),
        trunk_kg: Some(trunk),
    }
}

#[test]
fn test_segments_are_carried_through_unchecked() {
    let sample = BodyCompositionSample {
        weight_kg: Some(80.0),
        fat_mass_kg: Some(20.0),
        segmental_fat: masses(1.0, 1.0, 2.0, 2.0, 5.0),
        ..BodyCompositionSample::default()
    };

    let result = analyzer().analyze(&sample);
    assert_eq!(result.segmental_fat, sample.segmental_fat);
    assert_close(result.fat_mass_kg.unwrap(), 20.0);
    assert_close(result.segmental_fat.get(BodySegment::Trunk).unwrap(), 5.0);
}

#[test]
fn test_reconciliation_flags_disagreeing_segments() {
    init_test_logging();
    let config = default_config();
    let sample = BodyCompositionSample {
        weight_kg: Some(80.0),
        fat_mass_kg: Some(20.0),
        muscle_mass_kg: Some(34.0),
        segmental_fat: masses(1.0, 1.0, 2.0, 2.0, 5.0),
        segmental_muscle: masses(3.0, 3.1, 9.0, 9.0, 10.0),
        ..BodyCompositionSample::default()
    };

    let check = reconcile_segments(&sample, config.body_composition.segment_tolerance_kg);
    assert_close(check.tolerance_kg, 0.5);
    assert_eq!(check.fat.recorded_segments, 5);
    assert_close(check.fat.segment_sum_kg.unwrap(), 11.0);
    assert_close(check.fat.difference_kg.unwrap(), -9.0);
    assert_eq!(check.fat.within_tolerance, Some(false));
    assert_close(check.muscle.difference_kg.unwrap(), 0.1);
    assert_eq!(check.muscle.within_tolerance, Some(true));
    assert!(!check.is_consistent());
}

#[test]
fn test_partial_segments_are_summed() {
    let sample = BodyCompositionSample {
        muscle_mass_kg: Some(10.0),
        segmental_muscle: SegmentalMasses {
            trunk_kg: Some(10.2),
            ..SegmentalMasses::default()
        },
        ..BodyCompositionSample::default()
    };

    let check = reconcile_segments(&sample, 0.5);
    assert_eq!(check.muscle.recorded_segments, 1);
    assert_eq!(check.muscle.within_tolerance, Some(true));
    assert_eq!(check.fat.total_kg, None);
    assert!(check.is_consistent());
}
