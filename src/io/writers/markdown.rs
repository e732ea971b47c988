use super::projection_rows;
use crate::formatting::{format_currency, format_percentage};
use crate::io::output::{CatalogView, OutputWriter};
use crate::report::{AnalysisReport, ComparisonReport};
use crate::roi::Scenario;
use crate::scoring::PainLevel;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str, catalog_version: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", title)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Catalog version: {}", catalog_version)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_company(&mut self, company: &crate::core::CompanyProfile) -> anyhow::Result<()> {
        writeln!(self.writer, "## Company")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Industry | {} |", company.industry)?;
        writeln!(self.writer, "| Size | {} |", company.effective_size())?;
        writeln!(self.writer, "| Employees | {} |", company.employee_count)?;
        writeln!(
            self.writer,
            "| Monthly revenue | {} |",
            format_currency(company.monthly_revenue)
        )?;
        writeln!(
            self.writer,
            "| Hourly wage | {} |",
            format_currency(company.avg_hourly_wage)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        self.write_header("AI Use Case Analysis", &report.catalog_version)?;
        self.write_company(&report.company)?;

        writeln!(self.writer, "## Pain Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Area | Score | Level |")?;
        writeln!(self.writer, "|------|-------|-------|")?;
        for (name, score) in report.pain_scores.named() {
            let level = match PainLevel::of(score) {
                PainLevel::Low => "low",
                PainLevel::Moderate => "moderate",
                PainLevel::High => "high",
            };
            writeln!(self.writer, "| {} | {} | {} |", name, score, level)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Recommended Use Cases")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Use case | Category | Score | Industry fit | Pain relevance |"
        )?;
        writeln!(
            self.writer,
            "|---|----------|----------|-------|--------------|----------------|"
        )?;
        for (rank, rec) in report.recommendations.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} (`{}`) | {} | {:.2} | {} | {} |",
                rank + 1,
                rec.use_case.name,
                rec.use_case.id,
                rec.use_case.category,
                rec.score,
                rec.industry_fit,
                rec.pain_relevance
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_header("ROI Projection", &report.catalog_version)?;
        self.write_company(&report.company)?;

        for projection in &report.projections {
            writeln!(
                self.writer,
                "## {} (`{}`)",
                projection.use_case_name, projection.use_case_id
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Metric | Conservative | Realistic | Optimistic |")?;
            writeln!(self.writer, "|--------|--------------|-----------|------------|")?;
            for (label, [conservative, realistic, optimistic]) in projection_rows(projection) {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} |",
                    label, conservative, realistic, optimistic
                )?;
            }
            writeln!(self.writer)?;
        }

        if let Some(best) = report.best_realistic() {
            let realistic = best.scenario(Scenario::Realistic);
            writeln!(
                self.writer,
                "**Best realistic case:** {} with {} NPV over three years ({} ROI).",
                best.use_case_name,
                format_currency(realistic.npv_3_years),
                format_percentage(realistic.roi_percentage)
            )?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_catalog(&mut self, catalog: &CatalogView<'_>) -> anyhow::Result<()> {
        self.write_header("AI Use Case Catalog", catalog.version)?;

        if let Some(industry) = catalog.industry {
            writeln!(self.writer, "Industry fit shown for: {}", industry)?;
            writeln!(self.writer)?;
        }
        writeln!(
            self.writer,
            "| Id | Name | Category | Setup | Monthly | Fit |"
        )?;
        writeln!(self.writer, "|----|------|----------|-------|---------|-----|")?;
        for entry in &catalog.entries {
            let fit = entry
                .selected_fit
                .map(|fit| format!("{:.1}", fit))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                self.writer,
                "| `{}` | {} | {} | {} | {} | {} |",
                entry.use_case.id,
                entry.use_case.name,
                entry.use_case.category,
                format_currency(entry.use_case.setup_cost),
                format_currency(entry.use_case.monthly_cost),
                fit
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
