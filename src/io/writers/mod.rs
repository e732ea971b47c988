pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::formatting::{format_currency, format_months, format_percentage};
use crate::report::UseCaseProjection;
use crate::roi::ROIResult;

fn row(
    projection: &UseCaseProjection,
    label: &'static str,
    cell: fn(&ROIResult) -> String,
) -> (&'static str, [String; 3]) {
    (label, projection.scenarios.each_ref().map(cell))
}

/// Labelled rows of a scenario comparison, one value per scenario in
/// conservative, realistic, optimistic order. Shared by the table writers.
pub(crate) fn projection_rows(projection: &UseCaseProjection) -> Vec<(&'static str, [String; 3])> {
    let p = projection;
    vec![
        row(p, "Affected employees", |r| r.affected_employees.to_string()),
        row(p, "Total investment", |r| format_currency(r.total_investment)),
        row(p, "Time savings", |r| format_currency(r.cost_savings.time_savings)),
        row(p, "Error reduction", |r| format_currency(r.cost_savings.error_reduction)),
        row(p, "Productivity gain", |r| format_currency(r.cost_savings.productivity_gain)),
        row(p, "Retention gain", |r| {
            format_currency(r.revenue_increase.retention_improvement)
        }),
        row(p, "Conversion gain", |r| {
            format_currency(r.revenue_increase.conversion_improvement)
        }),
        row(p, "Annual benefit", |r| format_currency(r.total_annual_benefit)),
        row(p, "ROI", |r| format_percentage(r.roi_percentage)),
        row(p, "Payback", |r| format_months(r.payback_months)),
        row(p, "NPV (3 years)", |r| format_currency(r.npv_3_years)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::{CompanyProfile, Industry, SituationMetrics};
    use crate::report::{generate_comparison_report, UseCaseSelection};

    #[test]
    fn rows_cover_all_scenarios() {
        let catalog = Catalog::builtin();
        let selection = UseCaseSelection::new(&catalog, &["doc_processing"]).unwrap();
        let report = generate_comparison_report(
            &catalog,
            &CompanyProfile::new(Industry::Services, 100),
            &SituationMetrics::default(),
            &selection,
        );

        let rows = projection_rows(&report.projections[0]);
        assert_eq!(rows.len(), 11);
        let (label, investment) = &rows[1];
        assert_eq!(*label, "Total investment");
        assert_eq!(investment[0], "14.200 €");
        assert_eq!(investment[0], investment[2]);
    }
}
