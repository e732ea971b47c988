use super::projection_rows;
use crate::core::CompanyProfile;
use crate::formatting::{format_currency, format_percentage};
use crate::io::output::{CatalogView, OutputWriter};
use crate::report::{AnalysisReport, ComparisonReport};
use crate::roi::Scenario;
use crate::scoring::{PainLevel, Score0To1};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, use_color: bool) -> Self {
        Self { writer, use_color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_banner(&mut self, title: &str) -> anyhow::Result<()> {
        let rule = self.paint(RULE, |s| s.cyan());
        let title = self.paint(title, |s| s.bold().cyan());
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", rule)?;
        writeln!(self.writer, "  {}", title)?;
        writeln!(self.writer, "{}", rule)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(&mut self, title: &str) -> anyhow::Result<()> {
        let title = self.paint(title, |s| s.bold());
        writeln!(self.writer, "{}", title)?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        Ok(())
    }

    fn write_company(&mut self, company: &CompanyProfile) -> anyhow::Result<()> {
        self.write_section("COMPANY")?;
        writeln!(
            self.writer,
            "  {} | {} | {} employees",
            company.industry,
            company.effective_size(),
            company.employee_count
        )?;
        writeln!(
            self.writer,
            "  Revenue {}/month | Wage {}/hour",
            format_currency(company.monthly_revenue),
            format_currency(company.avg_hourly_wage)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn pain_line(&self, name: &str, score: Score0To1) -> String {
        let bar_width = (score.value() * 20.0).round() as usize;
        let bar = format!("{:<20}", "█".repeat(bar_width));
        let value = format!("{}", score);
        let (bar, value) = match PainLevel::of(score) {
            PainLevel::Low => (self.paint(&bar, |s| s.green()), self.paint(&value, |s| s.green())),
            PainLevel::Moderate => (
                self.paint(&bar, |s| s.yellow()),
                self.paint(&value, |s| s.yellow()),
            ),
            PainLevel::High => (self.paint(&bar, |s| s.red()), self.paint(&value, |s| s.red())),
        };
        format!("  {:<18} {} {}", name, bar, value)
    }

    fn table() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        self.write_banner("AI USE CASE ANALYSIS")?;
        self.write_company(&report.company)?;

        self.write_section("PAIN SCORES")?;
        for (name, score) in report.pain_scores.named() {
            let line = self.pain_line(name, score);
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer)?;

        self.write_section("RECOMMENDED USE CASES")?;
        let mut table = Self::table();
        table.set_header(vec![
            "#",
            "Use case",
            "Category",
            "Score",
            "Industry fit",
            "Pain relevance",
        ]);
        for (rank, rec) in report.recommendations.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                format!("{}\n{}", rec.use_case.name, rec.use_case.id),
                rec.use_case.category.to_string(),
                format!("{:.2}", rec.score),
                rec.industry_fit.to_string(),
                rec.pain_relevance.to_string(),
            ]);
        }
        writeln!(self.writer, "{}", table)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_banner("ROI PROJECTION")?;
        self.write_company(&report.company)?;

        for projection in &report.projections {
            let title = format!("{} ({})", projection.use_case_name, projection.use_case_id);
            self.write_section(&title)?;
            let mut table = Self::table();
            table.set_header(vec!["", "Conservative", "Realistic", "Optimistic"]);
            for (label, [conservative, realistic, optimistic]) in projection_rows(projection) {
                table.add_row(vec![label.to_string(), conservative, realistic, optimistic]);
            }
            writeln!(self.writer, "{}", table)?;
            writeln!(self.writer)?;
        }

        if let Some(best) = report.best_realistic() {
            let realistic = best.scenario(Scenario::Realistic);
            let verdict = format!(
                "Best realistic case: {} ({} NPV, {} ROI)",
                best.use_case_name,
                format_currency(realistic.npv_3_years),
                format_percentage(realistic.roi_percentage)
            );
            let verdict = self.paint(&verdict, |s| s.bold().green());
            writeln!(self.writer, "{}", verdict)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_catalog(&mut self, catalog: &CatalogView<'_>) -> anyhow::Result<()> {
        self.write_banner(&format!("USE CASE CATALOG {}", catalog.version))?;

        let mut table = Self::table();
        let fit_header = catalog
            .industry
            .map(|industry| format!("Fit ({})", industry))
            .unwrap_or_else(|| "Fit".to_string());
        table.set_header(vec![
            "Id".to_string(),
            "Name".to_string(),
            "Category".to_string(),
            "Setup".to_string(),
            "Monthly".to_string(),
            fit_header,
        ]);
        for entry in &catalog.entries {
            table.add_row(vec![
                entry.use_case.id.clone(),
                entry.use_case.name.clone(),
                entry.use_case.category.to_string(),
                format_currency(entry.use_case.setup_cost),
                format_currency(entry.use_case.monthly_cost),
                entry
                    .selected_fit
                    .map(|fit| format!("{:.1}", fit))
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        writeln!(self.writer, "{}", table)?;
        self.writer.flush()?;
        Ok(())
    }
}
