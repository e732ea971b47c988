use airoi::cli::{verbosity_filter, Cli, Commands};
use airoi::commands::{
    handle_analyze, handle_catalog, handle_project, init_config, AnalyzeConfig, CatalogConfig,
    ProjectConfig,
};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive. Falls back to
/// `RUST_LOG`, then to the `-v` count.
const LOG_ENV: &str = "AIROI_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Catalog { industry, format } => handle_catalog(CatalogConfig {
            config: cli.config,
            industry,
            format,
        }),
        Commands::Analyze {
            input,
            format,
            output,
        } => handle_analyze(AnalyzeConfig {
            input,
            config: cli.config,
            format,
            output,
        }),
        Commands::Project {
            input,
            use_cases,
            format,
            output,
        } => handle_project(ProjectConfig {
            input,
            config: cli.config,
            use_cases,
            format,
            output,
        }),
        Commands::Init { force } => {
            let dir = std::env::current_dir()?;
            init_config(&dir, force)
        }
    }
}

fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
