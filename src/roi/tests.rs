use super::*;
use crate::catalog::{BenefitDrivers, Catalog, IndustryFit, UseCaseCategory};
use crate::core::Industry;

fn services_company() -> CompanyProfile {
    CompanyProfile::new(Industry::Services, 100)
        .with_monthly_revenue(500_000.0)
        .with_hourly_wage(35.0)
}

fn builtin(id: &str) -> UseCase {
    Catalog::builtin().get(id).cloned().unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

fn free_use_case(benefits: BenefitDrivers) -> UseCase {
    UseCase {
        id: "free".to_string(),
        name: "Free tool".to_string(),
        category: UseCaseCategory::Automation,
        description: String::new(),
        setup_cost: 0.0,
        monthly_cost: 0.0,
        benefits,
        industry_fit: IndustryFit::default(),
    }
}

#[test]
fn affected_employees_rounds_down() {
    assert_eq!(affected_employees(100, 50.0), 50);
    assert_eq!(affected_employees(100, 33.0), 33);
    assert_eq!(affected_employees(7, 50.0), 3);
    assert_eq!(affected_employees(0, 80.0), 0);
}

#[test]
fn document_processing_realistic_breakdown() {
    let result = calculate_roi(
        &services_company(),
        &SituationMetrics::default(),
        &builtin("doc_processing"),
        Scenario::Realistic,
    );

    assert_eq!(result.affected_employees, 50);
    assert_close(result.effectiveness, 0.7);
    // 50 people * 40h * 52 weeks * 35/h * (40% * 0.7) * 30% manual
    assert_close(result.cost_savings.time_savings, 305_760.0);
    // 9125 tasks * 5% errors * (60% * 0.7) * 50 per error
    assert_close(result.cost_savings.error_reduction, 9_581.25);
    assert_eq!(result.cost_savings.productivity_gain, 0.0);
    assert_eq!(result.revenue_increase.total, 0.0);
    assert_close(result.total_annual_benefit, 315_341.25);

    assert_eq!(result.setup_cost, 10_000.0);
    assert_eq!(result.annual_operating_cost, 4_200.0);
    assert_eq!(result.total_investment, 14_200.0);
    assert_close(
        result.roi_percentage,
        (315_341.25 - 14_200.0) / 14_200.0 * 100.0,
    );
    assert_close(result.payback_months, 14_200.0 / (315_341.25 / 12.0));
    assert!(result.payback_months < 12.0);
}

#[test]
fn revenue_side_gains() {
    let company = services_company();
    let situation = SituationMetrics::default();

    let chatbot = calculate_roi(&company, &situation, &builtin("chatbot"), Scenario::Realistic);
    // 6M revenue * (8% * 0.9 * 0.2) * 0.1
    assert_close(chatbot.revenue_increase.retention_improvement, 8_640.0);
    assert_eq!(chatbot.revenue_increase.conversion_improvement, 0.0);

    let analytics = calculate_roi(
        &company,
        &situation,
        &builtin("predictive_analytics"),
        Scenario::Realistic,
    );
    // 6M revenue * (3% * 0.6) * 0.05
    assert_close(analytics.revenue_increase.conversion_improvement, 5_400.0);
    // labor 3.64M * (15% * 0.6 * 0.5)
    assert_close(analytics.cost_savings.productivity_gain, 163_800.0);
    assert_close(
        analytics.total_annual_benefit,
        analytics.cost_savings.total + analytics.revenue_increase.total,
    );
}

#[test]
fn scenario_scales_effectiveness() {
    let company = services_company();
    let situation = SituationMetrics::default();
    let use_case = builtin("workflow_automation");

    let benefits: Vec<f64> = Scenario::ALL
        .iter()
        .map(|scenario| calculate_roi(&company, &situation, &use_case, *scenario))
        .map(|result| result.total_annual_benefit)
        .collect();

    assert!(benefits[0] <= benefits[1]);
    assert!(benefits[1] <= benefits[2]);
    assert_close(benefits[0] / benefits[1], 0.6);
    assert_close(benefits[2] / benefits[1], 1.4);
}

#[test]
fn missing_industry_fit_uses_projection_default() {
    let use_case = free_use_case(BenefitDrivers {
        productivity_increase: 10.0,
        ..BenefitDrivers::default()
    });
    let result = calculate_roi(
        &services_company(),
        &SituationMetrics::default(),
        &use_case,
        Scenario::Optimistic,
    );
    assert_close(result.effectiveness, DEFAULT_PROJECTION_FIT * 1.4);
}

#[test]
fn zero_investment_gives_zero_roi() {
    let use_case = free_use_case(BenefitDrivers {
        time_savings_percentage: 50.0,
        ..BenefitDrivers::default()
    });
    let result = calculate_roi(
        &services_company(),
        &SituationMetrics::default(),
        &use_case,
        Scenario::Realistic,
    );

    assert!(result.total_annual_benefit > 0.0);
    assert_eq!(result.total_investment, 0.0);
    assert_eq!(result.roi_percentage, 0.0);
    assert_eq!(result.payback_months, 0.0);
}

#[test]
fn zero_benefit_never_pays_back() {
    let company = CompanyProfile::new(Industry::Retail, 0);
    let result = calculate_roi(
        &company,
        &SituationMetrics::default(),
        &builtin("doc_processing"),
        Scenario::Realistic,
    );

    assert_eq!(result.total_annual_benefit, 0.0);
    assert_eq!(result.payback_months, f64::INFINITY);
    assert_eq!(result.payback_months_finite(), None);
    assert_eq!(result.roi_percentage, -100.0);
    assert_eq!(result.npv_3_years, -result.total_investment);
}

#[test]
fn zero_employees_zeroes_error_term_without_nan() {
    let company = CompanyProfile::new(Industry::Finance, 0).with_monthly_revenue(10_000.0);
    let result = calculate_roi(
        &company,
        &SituationMetrics::default(),
        &builtin("doc_processing"),
        Scenario::Optimistic,
    );

    assert_eq!(result.affected_employees, 0);
    assert_eq!(result.cost_savings.error_reduction, 0.0);
    assert!(result.total_annual_benefit.is_finite());
    assert!(result.roi_percentage.is_finite());
}

#[test]
fn npv_matches_discounted_benefit() {
    let result = calculate_roi(
        &services_company(),
        &SituationMetrics::default(),
        &builtin("automated_reporting"),
        Scenario::Conservative,
    );
    let expected = net_present_value(
        result.total_annual_benefit,
        result.total_investment,
        3,
        0.08,
    );
    assert_eq!(result.npv_3_years, expected);
}

#[test]
fn infinite_payback_serializes_as_null() {
    let company = CompanyProfile::new(Industry::Retail, 0);
    let result = calculate_roi(
        &company,
        &SituationMetrics::default(),
        &builtin("chatbot"),
        Scenario::Realistic,
    );
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["payback_months"].is_null());
    assert_eq!(json["scenario"], "realistic");
}
