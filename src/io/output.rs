use crate::catalog::{Catalog, UseCase};
use crate::core::Industry;
use crate::report::{AnalysisReport, ComparisonReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_analysis(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()>;
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()>;
    fn write_catalog(&mut self, catalog: &CatalogView<'_>) -> anyhow::Result<()>;
}

/// Catalog as listed by `airoi catalog`, optionally seen from one industry.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
    pub entries: Vec<CatalogEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry<'a> {
    #[serde(flatten)]
    pub use_case: &'a UseCase,
    /// Fit for the selected industry, if one was given and the entry has a
    /// weight for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fit: Option<f64>,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a Catalog, industry: Option<Industry>) -> Self {
        let entries = catalog
            .iter()
            .map(|use_case| CatalogEntry {
                use_case,
                selected_fit: industry.and_then(|i| use_case.industry_fit.get(i)),
            })
            .collect();
        Self {
            version: catalog.version(),
            industry,
            entries,
        }
    }
}

/// Writer for `format`. Colors are only used for terminal output going to an
/// interactive stdout.
pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    use_color: bool,
) -> Box<dyn OutputWriter + 'w> {
    use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};

    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, use_color)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}
