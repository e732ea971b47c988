//! Report assembly.
//!
//! Glues the engine steps into the two results the presentation layer
//! renders: an [`AnalysisReport`] (pain scores plus ranked recommendations)
//! and a [`ComparisonReport`] (every selected use case under every scenario).

use crate::catalog::{Catalog, UseCase};
use crate::core::{CompanyProfile, SituationMetrics};
use crate::errors::{Error, Result};
use crate::roi::{calculate_roi, ROIResult, Scenario};
use crate::scoring::{
    calculate_pain_score, rank, score_use_cases, PainScores, Recommendation, MAX_RECOMMENDATIONS,
};
use serde::Serialize;

/// Most use cases a single comparison may cover.
pub const MAX_SELECTION: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    pub catalog_version: String,
    pub company: CompanyProfile,
    pub pain_scores: PainScores,
    pub recommendations: Vec<Recommendation<'a>>,
}

/// Score the situation and rank the catalog for this company.
pub fn analyze<'a>(
    catalog: &'a Catalog,
    company: &CompanyProfile,
    situation: &SituationMetrics,
) -> AnalysisReport<'a> {
    let pain_scores = calculate_pain_score(situation);
    let recommendations = rank(
        score_use_cases(catalog, company, &pain_scores),
        MAX_RECOMMENDATIONS,
    );

    AnalysisReport {
        catalog_version: catalog.version().to_string(),
        company: company.clone(),
        pain_scores,
        recommendations,
    }
}

/// One to [`MAX_SELECTION`] distinct use cases from a catalog.
#[derive(Debug, Clone)]
pub struct UseCaseSelection<'a> {
    use_cases: Vec<&'a UseCase>,
}

impl<'a> UseCaseSelection<'a> {
    pub fn new<S: AsRef<str>>(catalog: &'a Catalog, ids: &[S]) -> Result<Self> {
        if ids.is_empty() {
            return Err(Error::Selection(
                "select at least one use case".to_string(),
            ));
        }
        if ids.len() > MAX_SELECTION {
            return Err(Error::Selection(format!(
                "at most {} use cases can be compared, got {}",
                MAX_SELECTION,
                ids.len()
            )));
        }

        let mut use_cases: Vec<&'a UseCase> = Vec::with_capacity(ids.len());
        for id in ids {
            let use_case = catalog.require(id.as_ref())?;
            if use_cases.iter().any(|selected| selected.id == use_case.id) {
                return Err(Error::Selection(format!(
                    "use case '{}' selected twice",
                    use_case.id
                )));
            }
            use_cases.push(use_case);
        }
        Ok(Self { use_cases })
    }

    /// Selection made of the given recommendations, in ranking order.
    pub fn from_recommendations(recommendations: &[Recommendation<'a>]) -> Result<Self> {
        let use_cases: Vec<&'a UseCase> = recommendations
            .iter()
            .take(MAX_SELECTION)
            .map(|recommendation| recommendation.use_case)
            .collect();
        if use_cases.is_empty() {
            return Err(Error::Selection(
                "no recommendations to project".to_string(),
            ));
        }
        Ok(Self { use_cases })
    }

    pub fn use_cases(&self) -> &[&'a UseCase] {
        &self.use_cases
    }

    pub fn len(&self) -> usize {
        self.use_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.use_cases.is_empty()
    }
}

/// A use case projected under all three scenarios.
#[derive(Debug, Clone, Serialize)]
pub struct UseCaseProjection {
    pub use_case_id: String,
    pub use_case_name: String,
    /// Conservative, realistic, optimistic, in that order.
    pub scenarios: [ROIResult; 3],
}

impl UseCaseProjection {
    pub fn scenario(&self, scenario: Scenario) -> &ROIResult {
        match scenario {
            Scenario::Conservative => &self.scenarios[0],
            Scenario::Realistic => &self.scenarios[1],
            Scenario::Optimistic => &self.scenarios[2],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub catalog_version: String,
    pub company: CompanyProfile,
    pub projections: Vec<UseCaseProjection>,
}

impl ComparisonReport {
    pub fn get(&self, use_case_id: &str, scenario: Scenario) -> Option<&ROIResult> {
        self.projections
            .iter()
            .find(|projection| projection.use_case_id == use_case_id)
            .map(|projection| projection.scenario(scenario))
    }

    /// Projection with the highest realistic NPV.
    pub fn best_realistic(&self) -> Option<&UseCaseProjection> {
        self.projections.iter().max_by(|a, b| {
            a.scenario(Scenario::Realistic)
                .npv_3_years
                .total_cmp(&b.scenario(Scenario::Realistic).npv_3_years)
        })
    }
}

/// Project every selected use case under every scenario.
pub fn generate_comparison_report(
    catalog: &Catalog,
    company: &CompanyProfile,
    situation: &SituationMetrics,
    selection: &UseCaseSelection<'_>,
) -> ComparisonReport {
    let projections = selection
        .use_cases()
        .iter()
        .map(|use_case| UseCaseProjection {
            use_case_id: use_case.id.clone(),
            use_case_name: use_case.name.clone(),
            scenarios: Scenario::ALL
                .map(|scenario| calculate_roi(company, situation, use_case, scenario)),
        })
        .collect();

    ComparisonReport {
        catalog_version: catalog.version().to_string(),
        company: company.clone(),
        projections,
    }
}
