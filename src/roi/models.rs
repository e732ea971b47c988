use super::Scenario;
use serde::{Serialize, Serializer};

/// Cost-side annual benefits.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CostSavings {
    pub time_savings: f64,
    pub error_reduction: f64,
    pub productivity_gain: f64,
    pub total: f64,
}

impl CostSavings {
    pub fn new(time_savings: f64, error_reduction: f64, productivity_gain: f64) -> Self {
        Self {
            time_savings,
            error_reduction,
            productivity_gain,
            total: time_savings + error_reduction + productivity_gain,
        }
    }
}

/// Revenue-side annual benefits.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RevenueIncrease {
    pub retention_improvement: f64,
    pub conversion_improvement: f64,
    pub total: f64,
}

impl RevenueIncrease {
    pub fn new(retention_improvement: f64, conversion_improvement: f64) -> Self {
        Self {
            retention_improvement,
            conversion_improvement,
            total: retention_improvement + conversion_improvement,
        }
    }
}

/// Financial projection of one use case under one scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ROIResult {
    pub use_case_id: String,
    pub use_case_name: String,
    pub scenario: Scenario,
    pub affected_employees: u32,
    pub setup_cost: f64,
    pub annual_operating_cost: f64,
    pub total_investment: f64,
    pub cost_savings: CostSavings,
    pub revenue_increase: RevenueIncrease,
    pub total_annual_benefit: f64,
    pub roi_percentage: f64,
    /// `f64::INFINITY` when there is no benefit to pay the investment back.
    #[serde(serialize_with = "serialize_finite")]
    pub payback_months: f64,
    pub npv_3_years: f64,
    pub effectiveness: f64,
}

impl ROIResult {
    /// Payback period, or `None` if the investment is never recovered.
    pub fn payback_months_finite(&self) -> Option<f64> {
        self.payback_months
            .is_finite()
            .then_some(self.payback_months)
    }

    pub fn summary(&self) -> String {
        let payback = self
            .payback_months_finite()
            .map(|months| format!("{:.1} months", months))
            .unwrap_or_else(|| "never".to_string());
        format!(
            "{} [{}]: ROI {:.1}% | Benefit {:.0}/yr | Investment {:.0} | Payback {} | NPV(3y) {:.0}",
            self.use_case_name,
            self.scenario,
            self.roi_percentage,
            self.total_annual_benefit,
            self.total_investment,
            payback,
            self.npv_3_years
        )
    }
}

/// Non-finite numbers have no JSON representation; write them as `null`.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_some(value)
    } else {
        serializer.serialize_none()
    }
}
