//! Property-based tests for the scoring and ROI engine
//!
//! These tests verify invariants that should hold for all valid inputs:
//! - Pain scores stay within [0, 1]
//! - Recommendations are capped, sorted and deterministic
//! - Scenario results are ordered conservative <= realistic <= optimistic
//! - Investment, payback and NPV agree with each other

use airoi::catalog::Catalog;
use airoi::core::{CompanyProfile, Industry, SituationMetrics};
use airoi::roi::{calculate_roi, net_present_value, Scenario, DISCOUNT_RATE, NPV_YEARS};
use airoi::scoring::{calculate_pain_score, recommend_use_cases};
use proptest::prelude::*;

fn industry() -> impl Strategy<Value = Industry> {
    prop::sample::select(Industry::ALL.to_vec())
}

fn company() -> impl Strategy<Value = CompanyProfile> {
    (industry(), 1u32..5_000, 0.0..5_000_000.0f64, 10.0..150.0f64).prop_map(
        |(industry, employees, revenue, wage)| {
            CompanyProfile::new(industry, employees)
                .with_monthly_revenue(revenue)
                .with_hourly_wage(wage)
        },
    )
}

/// Situation with percentages in [0, 100] and other values in plausible ranges.
fn situation() -> impl Strategy<Value = SituationMetrics> {
    (
        (0.0..80.0f64, 0.0..=100.0f64, 0.0..=100.0f64, 0.0..600.0f64, 0.0..1_000.0f64),
        (0.0..=100.0f64, 0.0..1_000.0f64, 0.0..400.0f64, 0.0..=100.0f64),
        (0.0..50_000.0f64, 0.0..5_000.0f64, 0.0..20_000.0f64, 0.0..=100.0f64),
    )
        .prop_map(|(work, quality, customers)| SituationMetrics {
            weekly_hours_per_employee: work.0,
            manual_work_percentage: work.1,
            affected_employees_percentage: work.2,
            processing_time_per_task: work.3,
            tasks_per_day: work.4,
            error_rate: quality.0,
            cost_per_error: quality.1,
            avg_response_time: quality.2,
            customer_satisfaction: quality.3,
            support_tickets_per_month: customers.0,
            customer_acquisition_cost: customers.1,
            avg_customer_value: customers.2,
            customer_retention_rate: customers.3,
        })
}

proptest! {
    #[test]
    fn prop_pain_scores_are_bounded(situation in situation()) {
        let pain = calculate_pain_score(&situation);
        for (name, score) in pain.named() {
            prop_assert!(
                (0.0..=1.0).contains(&score.value()),
                "{} out of range: {}", name, score.value()
            );
        }
    }

    #[test]
    fn prop_recommendations_are_capped_sorted_and_deterministic(
        company in company(),
        situation in situation(),
    ) {
        let catalog = Catalog::builtin();
        let first = recommend_use_cases(&catalog, &company, &situation);
        let second = recommend_use_cases(&catalog, &company, &situation);

        prop_assert!(first.len() <= 3);
        prop_assert!(first.windows(2).all(|w| w[0].score >= w[1].score));

        let ids = |recs: &[airoi::Recommendation<'_>]| -> Vec<String> {
            recs.iter().map(|r| r.use_case.id.clone()).collect()
        };
        prop_assert_eq!(ids(&first), ids(&second));

        for rec in &first {
            prop_assert!((0.0..=1.0).contains(&rec.score));
            prop_assert!(catalog.get(&rec.use_case.id).is_some());
        }
    }

    #[test]
    fn prop_scenarios_are_ordered(
        company in company(),
        situation in situation(),
        index in 0usize..6,
    ) {
        let catalog = Catalog::builtin();
        let use_case = &catalog.use_cases()[index];
        let [conservative, realistic, optimistic] = Scenario::ALL
            .map(|scenario| calculate_roi(&company, &situation, use_case, scenario));

        prop_assert!(conservative.total_annual_benefit <= realistic.total_annual_benefit);
        prop_assert!(realistic.total_annual_benefit <= optimistic.total_annual_benefit);
        prop_assert!(conservative.npv_3_years <= optimistic.npv_3_years);
        prop_assert_eq!(conservative.total_investment, optimistic.total_investment);
    }

    #[test]
    fn prop_roi_figures_are_consistent(
        company in company(),
        situation in situation(),
        index in 0usize..6,
    ) {
        let catalog = Catalog::builtin();
        let use_case = &catalog.use_cases()[index];
        let result = calculate_roi(&company, &situation, use_case, Scenario::Realistic);

        prop_assert_eq!(
            result.total_investment,
            use_case.setup_cost + use_case.monthly_cost * 12.0
        );
        prop_assert!(result.affected_employees <= company.employee_count);
        prop_assert!(result.total_annual_benefit >= 0.0);

        if result.total_annual_benefit > 0.0 {
            let expected = result.total_investment / (result.total_annual_benefit / 12.0);
            prop_assert!((result.payback_months - expected).abs() <= 1e-9 * expected.max(1.0));
        } else {
            prop_assert!(result.payback_months.is_infinite());
        }

        let npv = net_present_value(
            result.total_annual_benefit,
            result.total_investment,
            NPV_YEARS,
            DISCOUNT_RATE,
        );
        prop_assert!((result.npv_3_years - npv).abs() <= 1e-6 * npv.abs().max(1.0));
    }

    #[test]
    fn prop_npv_grows_with_benefit(
        benefit in 0.0..1_000_000.0f64,
        extra in 1.0..100_000.0f64,
        investment in 0.0..100_000.0f64,
    ) {
        let lower = net_present_value(benefit, investment, NPV_YEARS, DISCOUNT_RATE);
        let higher = net_present_value(benefit + extra, investment, NPV_YEARS, DISCOUNT_RATE);
        prop_assert!(higher > lower);
    }
}
