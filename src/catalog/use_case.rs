use crate::core::Industry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Problem area a use case addresses. Decides which pain score a use case is
/// ranked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCaseCategory {
    Automation,
    CustomerInteraction,
    DataAnalysis,
    /// Entries that address none of the scored pain areas. Only
    /// user-supplied catalog entries use it.
    Other,
}

impl UseCaseCategory {
    pub fn label(self) -> &'static str {
        match self {
            UseCaseCategory::Automation => "Automation",
            UseCaseCategory::CustomerInteraction => "Customer interaction",
            UseCaseCategory::DataAnalysis => "Data analysis",
            UseCaseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for UseCaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Improvement percentages a use case promises. Sparse: zero means the driver
/// does not apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitDrivers {
    pub time_savings_percentage: f64,
    pub error_reduction_percentage: f64,
    pub productivity_increase: f64,
    /// Percentage points.
    pub customer_satisfaction_increase: f64,
    pub response_time_improvement: f64,
    /// Percentage points.
    pub conversion_rate_increase: f64,
}

impl BenefitDrivers {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("time_savings_percentage", self.time_savings_percentage),
            ("error_reduction_percentage", self.error_reduction_percentage),
            ("productivity_increase", self.productivity_increase),
            ("customer_satisfaction_increase", self.customer_satisfaction_increase),
            ("response_time_improvement", self.response_time_improvement),
            ("conversion_rate_increase", self.conversion_rate_increase),
        ]
    }
}

/// Per-industry fit weights in [0, 1]. Industries without an entry are
/// resolved by the caller's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndustryFit(BTreeMap<Industry, f64>);

impl IndustryFit {
    pub fn from_pairs(pairs: &[(Industry, f64)]) -> Self {
        Self(pairs.iter().copied().collect())
    }

    pub fn get(&self, industry: Industry) -> Option<f64> {
        self.0.get(&industry).copied()
    }

    /// Fit for `industry`, or `default` when the table has no entry.
    pub fn get_or(&self, industry: Industry, default: f64) -> f64 {
        self.get(industry).unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Industry, f64)> + '_ {
        self.0.iter().map(|(industry, fit)| (*industry, *fit))
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub name: String,
    pub category: UseCaseCategory,
    #[serde(default)]
    pub description: String,
    /// One-off setup cost in currency units.
    pub setup_cost: f64,
    /// Recurring cost per month in currency units.
    pub monthly_cost: f64,
    #[serde(default)]
    pub benefits: BenefitDrivers,
    #[serde(default)]
    pub industry_fit: IndustryFit,
}

impl UseCase {
    /// Annual operating cost (twelve monthly payments).
    pub fn annual_operating_cost(&self) -> f64 {
        self.monthly_cost * 12.0
    }

    /// First-year investment: setup plus a year of operation.
    pub fn total_investment(&self) -> f64 {
        self.setup_cost + self.annual_operating_cost()
    }

    /// Check the entry's numbers. Returns every problem found, not just the
    /// first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.id.trim().is_empty() {
            problems.push("use case id must not be empty".to_string());
        }
        if self.name.trim().is_empty() {
            problems.push(format!("use case '{}' has an empty name", self.id));
        }

        let costs = [("setup_cost", self.setup_cost), ("monthly_cost", self.monthly_cost)];
        for (field, value) in costs.into_iter().chain(self.benefits.named()) {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!(
                    "use case '{}': {} must be a non-negative number (got {})",
                    self.id, field, value
                ));
            }
        }

        for (industry, fit) in self.industry_fit.iter() {
            if !(0.0..=1.0).contains(&fit) {
                problems.push(format!(
                    "use case '{}': industry fit for {} must be between 0.0 and 1.0 (got {})",
                    self.id,
                    industry.id(),
                    fit
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
