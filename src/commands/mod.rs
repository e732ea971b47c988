//! CLI command implementations for airoi.
//!
//! Each submodule handles one command: it loads configuration and input,
//! calls the engine, and hands the result to an output writer.
//!
//! Available commands:
//! - **analyze**: Score pain points and rank use cases for a company
//! - **project**: Project ROI for selected use cases under all scenarios
//! - **catalog**: List the use case catalog
//! - **init**: Write a default configuration and a sample input file

pub mod analyze;
pub mod catalog;
pub mod init;
pub mod project;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use catalog::{handle_catalog, CatalogConfig};
pub use init::init_config;
pub use project::{handle_project, ProjectConfig};

use crate::catalog::Catalog;
use crate::config::{load_config, AiroiConfig};
use crate::formatting::ColorMode;
use crate::io::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Configuration and catalog shared by every command.
pub(crate) struct RunContext {
    pub config: AiroiConfig,
    pub catalog: Catalog,
}

pub(crate) fn load_context(config_path: Option<&Path>) -> Result<RunContext> {
    let config = load_config(config_path)?;
    let catalog = config
        .catalog()
        .context("Failed to build use case catalog from configuration")?;
    tracing::debug!(version = catalog.version(), entries = catalog.len(), "catalog ready");
    Ok(RunContext { config, catalog })
}

/// Run `write` against the writer for the chosen format and destination.
/// Output goes to `output` if given, otherwise to stdout.
pub(crate) fn with_writer<F>(
    format: Option<OutputFormat>,
    output: Option<&Path>,
    config: &AiroiConfig,
    write: F,
) -> Result<()>
where
    F: FnOnce(&mut dyn OutputWriter) -> Result<()>,
{
    let format = format.unwrap_or_else(|| config.default_format());

    let (destination, use_color): (Box<dyn Write>, bool) = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            (Box::new(BufWriter::new(file)), false)
        }
        None => {
            let color = ColorMode::from_env();
            color.apply();
            (Box::new(std::io::stdout().lock()), color.should_use_color())
        }
    };

    let mut writer = create_writer(format, destination, use_color);
    write(writer.as_mut())?;

    if let Some(path) = output {
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}
