//! ROI projection.
//!
//! [`calculate_roi`] turns a company profile, its situation metrics and one
//! catalog entry into a [`ROIResult`] for a given [`Scenario`]. Every benefit
//! is modulated by a single effectiveness factor:
//!
//! ```text
//! effectiveness = industry_fit(default 0.7) * scenario multiplier
//! ```
//!
//! All edge cases resolve to numbers. No investment gives an ROI of 0, no
//! benefit gives an infinite payback period, no employees zeroes the error
//! term.

pub mod models;
pub mod npv;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use models::{CostSavings, ROIResult, RevenueIncrease};
pub use npv::{net_present_value, DISCOUNT_RATE, NPV_YEARS};
pub use scenario::Scenario;

use crate::catalog::UseCase;
use crate::core::{CompanyProfile, SituationMetrics};

/// Fit assumed for industries a use case has no weight for.
pub const DEFAULT_PROJECTION_FIT: f64 = 0.7;

const WEEKS_PER_YEAR: f64 = 52.0;
const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
/// Share of a productivity increase that turns into saved labor cost.
const PRODUCTIVITY_REALIZATION: f64 = 0.5;
/// Share of a satisfaction increase that turns into retention.
const SATISFACTION_TO_RETENTION: f64 = 0.2;
/// Share of revenue at stake through churn.
const RETENTION_REVENUE_SHARE: f64 = 0.1;
/// Share of revenue a conversion uplift acts on.
const CONVERSION_REVENUE_SHARE: f64 = 0.05;

/// Employees the use case touches, rounded down.
pub fn affected_employees(employee_count: u32, affected_percentage: f64) -> u32 {
    // `as` saturates, and NaN becomes 0
    (f64::from(employee_count) * affected_percentage / 100.0).floor() as u32
}

pub fn effectiveness(company: &CompanyProfile, use_case: &UseCase, scenario: Scenario) -> f64 {
    use_case
        .industry_fit
        .get_or(company.industry, DEFAULT_PROJECTION_FIT)
        * scenario.multiplier()
}

/// Project the yearly costs and benefits of `use_case` for this company.
pub fn calculate_roi(
    company: &CompanyProfile,
    situation: &SituationMetrics,
    use_case: &UseCase,
    scenario: Scenario,
) -> ROIResult {
    let effectiveness = effectiveness(company, use_case, scenario);
    let benefits = &use_case.benefits;

    let affected = affected_employees(
        company.employee_count,
        situation.affected_employees_percentage,
    );
    let annual_labor_cost_affected = f64::from(affected)
        * situation.weekly_hours_per_employee
        * WEEKS_PER_YEAR
        * company.avg_hourly_wage;

    let time_savings = annual_labor_cost_affected
        * (benefits.time_savings_percentage / 100.0 * effectiveness)
        * (situation.manual_work_percentage / 100.0);

    let error_reduction = if company.employee_count == 0 {
        0.0
    } else {
        let affected_tasks_per_year = situation.tasks_per_day
            * DAYS_PER_YEAR
            * f64::from(affected)
            / f64::from(company.employee_count);
        affected_tasks_per_year
            * (situation.error_rate / 100.0)
            * (benefits.error_reduction_percentage / 100.0 * effectiveness)
            * situation.cost_per_error
    };

    let productivity_gain = annual_labor_cost_affected
        * (benefits.productivity_increase / 100.0 * effectiveness * PRODUCTIVITY_REALIZATION);

    let annual_revenue = company.monthly_revenue * MONTHS_PER_YEAR;
    let retention_improvement = annual_revenue
        * (benefits.customer_satisfaction_increase / 100.0
            * effectiveness
            * SATISFACTION_TO_RETENTION)
        * RETENTION_REVENUE_SHARE;
    let conversion_improvement = annual_revenue
        * (benefits.conversion_rate_increase / 100.0 * effectiveness)
        * CONVERSION_REVENUE_SHARE;

    let cost_savings = CostSavings::new(time_savings, error_reduction, productivity_gain);
    let revenue_increase = RevenueIncrease::new(retention_improvement, conversion_improvement);
    let total_annual_benefit = cost_savings.total + revenue_increase.total;

    let total_investment = use_case.total_investment();
    let roi_percentage = if total_investment > 0.0 {
        (total_annual_benefit - total_investment) / total_investment * 100.0
    } else {
        0.0
    };
    let payback_months = if total_annual_benefit > 0.0 {
        total_investment / (total_annual_benefit / MONTHS_PER_YEAR)
    } else {
        f64::INFINITY
    };

    let result = ROIResult {
        use_case_id: use_case.id.clone(),
        use_case_name: use_case.name.clone(),
        scenario,
        affected_employees: affected,
        setup_cost: use_case.setup_cost,
        annual_operating_cost: use_case.annual_operating_cost(),
        total_investment,
        cost_savings,
        revenue_increase,
        total_annual_benefit,
        roi_percentage,
        payback_months,
        npv_3_years: net_present_value(
            total_annual_benefit,
            total_investment,
            NPV_YEARS,
            DISCOUNT_RATE,
        ),
        effectiveness,
    };
    tracing::debug!(summary = %result.summary(), "projected use case");
    result
}
