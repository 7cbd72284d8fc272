// ABOUTME: Criterion benchmarks for Nutrition DNA generation and derived analytics
// ABOUTME: Measures profile generation, batch fan-out, weekly prediction, and food planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! Criterion benchmarks for the analytics engines over synthetic meal logs.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrition_dna::intelligence::dna_generator::UserBatch;
use nutrition_dna::intelligence::{
    BehaviorPredictor, FoodPlanGenerator, NutritionDnaGenerator, PhraseSelector,
};
use nutrition_dna::models::{FoodLogEntry, Macros, UserProfile};

const SIZES: [usize; 3] = [50, 500, 2000];

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

/// Three to four meals per day with varied hours, calories and tags
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_logs(count: usize) -> Vec<FoodLogEntry> {
    let hours = [7, 8, 12, 13, 19, 20, 22];
    let tags = ["home", "work", "restaurant", "friends", "stress", "quick"];
    (0..count)
        .map(|index| {
            let day = start_date() + Duration::days((index / 4) as i64);
            let hour = hours[(index * 5) % hours.len()];
            let minute = (index * 13) % 60;
            let calories = 250.0 + ((index * 97) % 700) as f64;
            FoodLogEntry::new(
                format!("{day}T{hour:02}:{minute:02}:00"),
                Some(
                    Macros::new(calories, calories * 0.06, calories * 0.035, calories * 0.12)
                        .with_fiber(((index * 7) % 12) as f64),
                ),
            )
            .with_metadata("location", tags[index % tags.len()])
            .with_metadata("note", format!("meal {}", index % 17))
        })
        .collect()
}

fn profile() -> UserProfile {
    UserProfile {
        goal: Some("weight loss".to_owned()),
        daily_calories_target: Some(1900.0),
        age: Some(34),
        ..UserProfile::default()
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dna_generate");
    let generator = NutritionDnaGenerator::default();
    let profile = profile();

    for size in SIZES {
        let logs = generate_logs(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("generate", size), &logs, |b, logs| {
            b.iter(|| generator.generate(black_box(&profile), black_box(logs), None));
        });
    }

    group.finish();
}

fn bench_generate_many(c: &mut Criterion) {
    let generator = NutritionDnaGenerator::default();
    let batches: Vec<UserBatch> = (0..32)
        .map(|user| UserBatch {
            user_id: format!("user-{user}"),
            profile: profile(),
            logs: generate_logs(200 + user * 10),
        })
        .collect();

    c.bench_function("dna_generate_many_32_users", |b| {
        b.iter(|| generator.generate_many(black_box(&batches)));
    });
}

fn bench_predict_weekly(c: &mut Criterion) {
    let logs = generate_logs(500);
    let dna = NutritionDnaGenerator::default().generate(&profile(), &logs, None);
    let predictor = BehaviorPredictor::default();

    c.bench_function("predict_weekly", |b| {
        b.iter(|| predictor.predict_weekly(black_box(&dna), start_date(), &[]));
    });
}

fn bench_food_plan(c: &mut Criterion) {
    let logs = generate_logs(500);
    let profile = profile();
    let mut generator = FoodPlanGenerator::default().with_phrases(PhraseSelector::seeded(7));

    c.bench_function("food_plan_7_days", |b| {
        b.iter(|| generator.generate(black_box(&profile), black_box(&logs), start_date(), 7, &[]));
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_generate_many,
    bench_predict_weekly,
    bench_food_plan,
);
criterion_main!(benches);
