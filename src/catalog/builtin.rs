//! Built-in use case dataset.
//!
//! Order matters: it is the tie-break for equally scored recommendations.

use super::use_case::{BenefitDrivers, IndustryFit, UseCase, UseCaseCategory};
use crate::core::Industry::{self, *};

/// Version of the built-in dataset. Bump whenever a figure below changes.
pub const CATALOG_VERSION: &str = "2024.1";

struct Entry {
    id: &'static str,
    name: &'static str,
    category: UseCaseCategory,
    description: &'static str,
    setup_cost: f64,
    monthly_cost: f64,
    benefits: BenefitDrivers,
    fit: [(Industry, f64); 8],
}

fn entries() -> Vec<Entry> {
    vec![
        Entry {
            id: "doc_processing",
            name: "Intelligent document processing",
            category: UseCaseCategory::Automation,
            description: "Automatic data extraction from invoices, contracts and e-mails",
            setup_cost: 10_000.0,
            monthly_cost: 350.0,
            benefits: BenefitDrivers {
                time_savings_percentage: 40.0,
                error_reduction_percentage: 60.0,
                ..BenefitDrivers::default()
            },
            fit: [
                (Finance, 0.9),
                (Healthcare, 0.8),
                (Logistics, 0.8),
                (Services, 0.7),
                (Manufacturing, 0.6),
                (Retail, 0.6),
                (ItSoftware, 0.7),
                (Other, 0.7),
            ],
        },
        Entry {
            id: "workflow_automation",
            name: "Workflow automation",
            category: UseCaseCategory::Automation,
            description: "Automatic routing and handling of requests",
            setup_cost: 17_500.0,
            monthly_cost: 550.0,
            benefits: BenefitDrivers {
                time_savings_percentage: 30.0,
                productivity_increase: 20.0,
                ..BenefitDrivers::default()
            },
            fit: [
                (Services, 0.9),
                (Finance, 0.8),
                (Healthcare, 0.8),
                (ItSoftware, 0.9),
                (Logistics, 0.7),
                (Manufacturing, 0.6),
                (Retail, 0.7),
                (Other, 0.7),
            ],
        },
        Entry {
            id: "chatbot",
            name: "Intelligent chatbot / virtual assistant",
            category: UseCaseCategory::CustomerInteraction,
            description: "Around-the-clock support for frequent customer questions",
            setup_cost: 6_500.0,
            monthly_cost: 275.0,
            benefits: BenefitDrivers {
                time_savings_percentage: 35.0,
                customer_satisfaction_increase: 8.0,
                response_time_improvement: 50.0,
                ..BenefitDrivers::default()
            },
            fit: [
                (Retail, 0.9),
                (Services, 0.9),
                (Finance, 0.8),
                (ItSoftware, 0.8),
                (Healthcare, 0.7),
                (Logistics, 0.6),
                (Manufacturing, 0.5),
                (Other, 0.7),
            ],
        },
        Entry {
            id: "predictive_analytics",
            name: "Predictive sales analytics",
            category: UseCaseCategory::DataAnalysis,
            description: "Forecasting of sales trends and demand",
            setup_cost: 21_000.0,
            monthly_cost: 650.0,
            benefits: BenefitDrivers {
                productivity_increase: 15.0,
                conversion_rate_increase: 3.0,
                ..BenefitDrivers::default()
            },
            fit: [
                (Retail, 0.9),
                (Manufacturing, 0.8),
                (Logistics, 0.8),
                (Finance, 0.7),
                (Services, 0.6),
                (ItSoftware, 0.7),
                (Healthcare, 0.5),
                (Other, 0.6),
            ],
        },
        Entry {
            id: "personalized_recommendations",
            name: "Personalized product recommendations",
            category: UseCaseCategory::CustomerInteraction,
            description: "AI-driven cross- and upselling suggestions",
            setup_cost: 14_000.0,
            monthly_cost: 500.0,
            benefits: BenefitDrivers {
                customer_satisfaction_increase: 5.0,
                conversion_rate_increase: 8.0,
                ..BenefitDrivers::default()
            },
            fit: [
                (Retail, 1.0),
                (Services, 0.8),
                (Finance, 0.7),
                (ItSoftware, 0.6),
                (Healthcare, 0.4),
                (Logistics, 0.3),
                (Manufacturing, 0.3),
                (Other, 0.5),
            ],
        },
        Entry {
            id: "automated_reporting",
            name: "Automated reporting",
            category: UseCaseCategory::DataAnalysis,
            description: "Generated reports and dashboards",
            setup_cost: 10_500.0,
            monthly_cost: 425.0,
            benefits: BenefitDrivers {
                time_savings_percentage: 50.0,
                productivity_increase: 15.0,
                ..BenefitDrivers::default()
            },
            fit: [
                (Finance, 0.9),
                (Manufacturing, 0.8),
                (Services, 0.8),
                (ItSoftware, 0.9),
                (Healthcare, 0.7),
                (Logistics, 0.7),
                (Retail, 0.7),
                (Other, 0.7),
            ],
        },
    ]
}

pub(super) fn builtin_use_cases() -> Vec<UseCase> {
    entries()
        .into_iter()
        .map(|entry| UseCase {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            category: entry.category,
            description: entry.description.to_string(),
            setup_cost: entry.setup_cost,
            monthly_cost: entry.monthly_cost,
            benefits: entry.benefits,
            industry_fit: IndustryFit::from_pairs(&entry.fit),
        })
        .collect()
}
