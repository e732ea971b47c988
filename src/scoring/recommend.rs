//! Use case ranking.
//!
//! Every catalog entry is scored as a blend of how well it suits the
//! company's industry and how acute the pain it addresses is:
//!
//! ```text
//! score = 0.4 * industry_fit + 0.6 * pain_relevance
//! ```
//!
//! The ranking keeps catalog order for equal scores, so the result is fully
//! determined by the inputs and the catalog.

use super::pain::{calculate_pain_score, PainScores};
use super::score_types::Score0To1;
use crate::catalog::{Catalog, UseCase, UseCaseCategory};
use crate::core::{CompanyProfile, SituationMetrics};
use serde::Serialize;

/// Number of entries a ranking returns at most.
pub const MAX_RECOMMENDATIONS: usize = 3;
/// Fit assumed for industries a use case has no weight for.
pub const DEFAULT_RANKING_FIT: f64 = 0.5;

const INDUSTRY_FIT_WEIGHT: f64 = 0.4;
const PAIN_RELEVANCE_WEIGHT: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub use_case: &'a UseCase,
    pub score: f64,
    pub industry_fit: Score0To1,
    pub pain_relevance: Score0To1,
}

/// Pain score a category is judged against.
pub fn pain_relevance(category: UseCaseCategory, pain: &PainScores) -> Score0To1 {
    match category {
        UseCaseCategory::Automation => pain.efficiency,
        UseCaseCategory::CustomerInteraction => pain.customer_service,
        UseCaseCategory::DataAnalysis => pain.efficiency.mean(pain.scaling),
        UseCaseCategory::Other => Score0To1::ZERO,
    }
}

/// Score every catalog entry, in catalog order, without truncation.
pub fn score_use_cases<'a>(
    catalog: &'a Catalog,
    company: &CompanyProfile,
    pain: &PainScores,
) -> Vec<Recommendation<'a>> {
    catalog
        .iter()
        .map(|use_case| {
            let industry_fit = Score0To1::new(
                use_case
                    .industry_fit
                    .get_or(company.industry, DEFAULT_RANKING_FIT),
            );
            let pain_relevance = pain_relevance(use_case.category, pain);
            let score = INDUSTRY_FIT_WEIGHT * industry_fit.value()
                + PAIN_RELEVANCE_WEIGHT * pain_relevance.value();

            Recommendation {
                use_case,
                score,
                industry_fit,
                pain_relevance,
            }
        })
        .collect()
}

/// Stable descending sort by score, truncated to `limit`.
pub fn rank(mut scored: Vec<Recommendation<'_>>, limit: usize) -> Vec<Recommendation<'_>> {
    // sort_by is stable, equal scores keep catalog order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Top [`MAX_RECOMMENDATIONS`] use cases for this company.
///
/// ```rust
/// use airoi::catalog::Catalog;
/// use airoi::core::{CompanyProfile, Industry, SituationMetrics};
/// use airoi::scoring::recommend_use_cases;
///
/// let catalog = Catalog::builtin();
/// let company = CompanyProfile::new(Industry::Retail, 40);
/// let ranked = recommend_use_cases(&catalog, &company, &SituationMetrics::default());
///
/// assert_eq!(ranked.len(), 3);
/// assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
/// ```
pub fn recommend_use_cases<'a>(
    catalog: &'a Catalog,
    company: &CompanyProfile,
    situation: &SituationMetrics,
) -> Vec<Recommendation<'a>> {
    let pain = calculate_pain_score(situation);
    let ranked = rank(score_use_cases(catalog, company, &pain), MAX_RECOMMENDATIONS);
    tracing::debug!(
        industry = %company.industry,
        top = ?ranked.iter().map(|r| r.use_case.id.as_str()).collect::<Vec<_>>(),
        "ranked use cases"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BenefitDrivers, IndustryFit};
    use crate::core::Industry;

    fn pain(efficiency: f64, customer_service: f64, scaling: f64) -> PainScores {
        PainScores {
            efficiency: Score0To1::new(efficiency),
            customer_service: Score0To1::new(customer_service),
            scaling: Score0To1::new(scaling),
        }
    }

    fn flat_use_case(id: &str, category: UseCaseCategory) -> UseCase {
        UseCase {
            id: id.to_string(),
            name: id.to_string(),
            category,
            description: String::new(),
            setup_cost: 0.0,
            monthly_cost: 0.0,
            benefits: BenefitDrivers::default(),
            industry_fit: IndustryFit::default(),
        }
    }

    #[test]
    fn category_maps_to_its_pain_score() {
        let pain = pain(0.2, 0.5, 0.6);
        assert_eq!(pain_relevance(UseCaseCategory::Automation, &pain).value(), 0.2);
        assert_eq!(
            pain_relevance(UseCaseCategory::CustomerInteraction, &pain).value(),
            0.5
        );
        assert!(
            (pain_relevance(UseCaseCategory::DataAnalysis, &pain).value() - 0.4).abs() < 1e-12
        );
        assert_eq!(pain_relevance(UseCaseCategory::Other, &pain), Score0To1::ZERO);
    }

    #[test]
    fn score_blends_fit_and_pain() {
        let catalog = Catalog::builtin();
        let company = CompanyProfile::new(Industry::Finance, 10);
        let scored = score_use_cases(&catalog, &company, &pain(0.5, 0.0, 0.0));

        let doc = &scored[0];
        assert_eq!(doc.use_case.id, "doc_processing");
        assert_eq!(doc.industry_fit.value(), 0.9);
        assert!((doc.score - (0.4 * 0.9 + 0.6 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn missing_industry_weight_uses_ranking_default() {
        let catalog =
            Catalog::with_extensions(vec![flat_use_case("bare", UseCaseCategory::Other)]).unwrap();
        let company = CompanyProfile::new(Industry::Retail, 10);
        let scored = score_use_cases(&catalog, &company, &pain(0.0, 0.0, 0.0));

        let bare = scored.iter().find(|r| r.use_case.id == "bare").unwrap();
        assert_eq!(bare.industry_fit.value(), DEFAULT_RANKING_FIT);
        assert!((bare.score - 0.2).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let catalog = Catalog::with_extensions(vec![
            flat_use_case("first", UseCaseCategory::Other),
            flat_use_case("second", UseCaseCategory::Other),
            flat_use_case("third", UseCaseCategory::Other),
            flat_use_case("fourth", UseCaseCategory::Other),
        ])
        .unwrap();
        let company = CompanyProfile::new(Industry::Retail, 10);
        let scored: Vec<_> = score_use_cases(&catalog, &company, &pain(0.0, 0.0, 0.0))
            .into_iter()
            .filter(|r| r.use_case.category == UseCaseCategory::Other)
            .collect();

        let ranked = rank(scored, 3);
        let ids: Vec<&str> = ranked.iter().map(|r| r.use_case.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn recommends_at_most_three() {
        let catalog = Catalog::builtin();
        let company = CompanyProfile::new(Industry::ItSoftware, 100);
        let ranked = recommend_use_cases(&catalog, &company, &SituationMetrics::default());
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn retail_with_unhappy_customers_prefers_customer_interaction() {
        let catalog = Catalog::builtin();
        let company = CompanyProfile::new(Industry::Retail, 30);
        let situation = SituationMetrics {
            manual_work_percentage: 5.0,
            processing_time_per_task: 5.0,
            error_rate: 1.0,
            avg_response_time: 72.0,
            customer_satisfaction: 20.0,
            support_tickets_per_month: 100.0,
            ..SituationMetrics::default()
        };

        let ranked = recommend_use_cases(&catalog, &company, &situation);
        assert_eq!(ranked[0].use_case.id, "personalized_recommendations");
        assert_eq!(ranked[1].use_case.id, "chatbot");
    }
}
