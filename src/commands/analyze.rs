use super::{load_context, with_writer};
use crate::io::{load_input, OutputFormat};
use crate::report::analyze;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Score the questionnaire and print the ranked recommendations.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let context = load_context(config.config.as_deref())?;
    let input = load_input(&config.input, &context.config.defaults())
        .with_context(|| format!("Failed to load questionnaire {}", config.input.display()))?;

    let report = analyze(&context.catalog, &input.company, &input.situation);
    tracing::info!(
        recommendations = report.recommendations.len(),
        "analysis complete"
    );

    with_writer(
        config.format,
        config.output.as_deref(),
        &context.config,
        |writer| writer.write_analysis(&report),
    )
}
