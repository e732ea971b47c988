//! Benchmarks for the scoring and projection engine.

use airoi::catalog::{BenefitDrivers, Catalog, IndustryFit, UseCase, UseCaseCategory};
use airoi::core::{CompanyProfile, Industry, SituationMetrics};
use airoi::report::{generate_comparison_report, UseCaseSelection};
use airoi::roi::{calculate_roi, Scenario};
use airoi::scoring::{calculate_pain_score, recommend_use_cases};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn company() -> CompanyProfile {
    CompanyProfile::new(Industry::Retail, 250)
        .with_monthly_revenue(800_000.0)
        .with_hourly_wage(32.0)
}

fn synthetic_use_case(index: usize) -> UseCase {
    let category = match index % 3 {
        0 => UseCaseCategory::Automation,
        1 => UseCaseCategory::CustomerInteraction,
        _ => UseCaseCategory::DataAnalysis,
    };
    UseCase {
        id: format!("synthetic_{index}"),
        name: format!("Synthetic {index}"),
        category,
        description: String::new(),
        setup_cost: 1_000.0 + index as f64 * 10.0,
        monthly_cost: 100.0,
        benefits: BenefitDrivers {
            time_savings_percentage: (index % 50) as f64,
            productivity_increase: (index % 20) as f64,
            ..BenefitDrivers::default()
        },
        industry_fit: IndustryFit::from_pairs(&[(Industry::Retail, (index % 10) as f64 / 10.0)]),
    }
}

fn bench_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_use_cases");
    let company = company();
    let situation = SituationMetrics::default();

    for extra in [0usize, 100, 1_000] {
        let catalog =
            Catalog::with_extensions((0..extra).map(synthetic_use_case).collect()).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(catalog.len()),
            &catalog,
            |b, catalog| {
                b.iter(|| recommend_use_cases(black_box(catalog), &company, &situation));
            },
        );
    }
    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let company = company();
    let situation = SituationMetrics::default();

    c.bench_function("calculate_pain_score", |b| {
        b.iter(|| calculate_pain_score(black_box(&situation)))
    });

    let chatbot = catalog.get("chatbot").unwrap();
    c.bench_function("calculate_roi", |b| {
        b.iter(|| calculate_roi(&company, &situation, black_box(chatbot), Scenario::Realistic))
    });

    let selection = UseCaseSelection::new(
        &catalog,
        &["chatbot", "doc_processing", "personalized_recommendations"],
    )
    .unwrap();
    c.bench_function("generate_comparison_report", |b| {
        b.iter(|| generate_comparison_report(&catalog, &company, &situation, black_box(&selection)))
    });
}

criterion_group!(benches, bench_recommendations, bench_projection);
criterion_main!(benches);
