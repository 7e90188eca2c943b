// ABOUTME: Criterion benchmarks for the nutrition calculators and patient reports
// ABOUTME: Measures energy, macro split, composition history, intake aggregation, and full reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the calculation engine.
//!
//! Single calculator calls are sub-microsecond; the history and recall
//! groups show how the batch paths scale.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_composition_history, generate_recall, BatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutricalc::calculators::{
    BodyCompositionAnalyzer, DailyIntakeAggregator, EnergyExpenditureCalculator,
    MacronutrientSplitter,
};
use nutricalc::config::EngineConfig;
use nutricalc::models::{
    ActivityProfile, AnthropometricInput, EnergyAdjustment, GoalTarget, MacroSplit, Sex,
};
use nutricalc::report::{NutritionReport, PatientSnapshot};

fn reference_input() -> AnthropometricInput {
    AnthropometricInput {
        weight_kg: Some(92.0),
        height: Some(176.0),
        sex: Sex::Male,
        age_years: Some(41.0),
        ..AnthropometricInput::default()
    }
}

/// Benchmark the energy expenditure chain for every activity profile
fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");
    let config: EngineConfig<true> = EngineConfig::default();
    let calculator = EnergyExpenditureCalculator::with_config(&config);
    let input = reference_input();

    for profile in ActivityProfile::ALL {
        group.bench_with_input(
            BenchmarkId::new("compute_for", format!("{profile:?}")),
            &profile,
            |b, profile| {
                b.iter(|| {
                    calculator.compute_for(
                        black_box(&input),
                        black_box(*profile),
                        black_box(EnergyAdjustment::deficit(500.0)),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark macro splitting, normalized and already summing to 100
fn bench_macro_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("macro_split");
    let config: EngineConfig<true> = EngineConfig::default();
    let splitter = MacronutrientSplitter::with_config(&config);

    group.bench_function("balanced_split", |b| {
        b.iter(|| splitter.split(black_box(2100.0), 50.0, 20.0, 30.0, black_box(92.0)));
    });
    group.bench_function("normalized_split", |b| {
        b.iter(|| splitter.split(black_box(2100.0), 60.0, 35.0, 40.0, black_box(92.0)));
    });

    group.finish();
}

/// Benchmark composition history analysis with varying history lengths
#[allow(clippy::cast_possible_truncation)]
fn bench_composition_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition_history");
    let config: EngineConfig<true> = EngineConfig::default();
    let analyzer = BodyCompositionAnalyzer::with_config(&config);

    for size in [BatchSize::Small, BatchSize::Medium, BatchSize::Large] {
        let history = generate_composition_history(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze_history", size.count()),
            &history,
            |b, history| {
                b.iter(|| analyzer.analyze_history(black_box(history)));
            },
        );
    }

    group.finish();
}

/// Benchmark intake aggregation with varying recall sizes
#[allow(clippy::cast_possible_truncation)]
fn bench_intake(c: &mut Criterion) {
    let mut group = c.benchmark_group("intake");
    let config: EngineConfig<true> = EngineConfig::default();
    let aggregator = DailyIntakeAggregator::with_config(&config);

    for size in [BatchSize::Small, BatchSize::Medium, BatchSize::Large] {
        let recall = generate_recall(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("aggregate_for_weight", size.count()),
            &recall,
            |b, recall| {
                b.iter(|| aggregator.aggregate_for_weight(black_box(recall), Some(92.0)));
            },
        );
    }

    group.finish();
}

/// Benchmark a full patient report
fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    group.sample_size(50);
    let config: EngineConfig<true> = EngineConfig::default();
    let snapshot = PatientSnapshot {
        anthropometrics: reference_input(),
        activity: ActivityProfile::Active,
        adjustment: EnergyAdjustment::deficit(400.0),
        macro_split: MacroSplit::new(45.0, 25.0, 30.0),
        composition_history: generate_composition_history(BatchSize::Medium),
        intake: generate_recall(BatchSize::Small),
        goals: Some(GoalTarget {
            weight_kg: Some(82.0),
            fat_percent: Some(22.0),
            ..GoalTarget::default()
        }),
        daily_steps: Some(7500.0),
    };

    group.bench_function("build_with_config", |b| {
        b.iter(|| NutritionReport::build_with_config(black_box(&snapshot), &config));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_energy,
    bench_macro_split,
    bench_composition_history,
    bench_intake,
    bench_report,
);
criterion_main!(benches);
