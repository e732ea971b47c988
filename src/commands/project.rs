use super::{load_context, with_writer};
use crate::io::{load_input, OutputFormat};
use crate::report::{analyze, generate_comparison_report, UseCaseSelection};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct ProjectConfig {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    /// Use cases to project. Empty means the top recommendations.
    pub use_cases: Vec<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Project every selected use case under the three scenarios.
pub fn handle_project(config: ProjectConfig) -> Result<()> {
    let context = load_context(config.config.as_deref())?;
    let input = load_input(&config.input, &context.config.defaults())
        .with_context(|| format!("Failed to load questionnaire {}", config.input.display()))?;

    let report = if config.use_cases.is_empty() {
        let analysis = analyze(&context.catalog, &input.company, &input.situation);
        let selection = UseCaseSelection::from_recommendations(&analysis.recommendations)?;
        tracing::info!("no use cases given, projecting top {} recommendations", selection.len());
        generate_comparison_report(&context.catalog, &input.company, &input.situation, &selection)
    } else {
        let selection = UseCaseSelection::new(&context.catalog, &config.use_cases)?;
        generate_comparison_report(&context.catalog, &input.company, &input.situation, &selection)
    };

    with_writer(
        config.format,
        config.output.as_deref(),
        &context.config,
        |writer| writer.write_comparison(&report),
    )
}
