use crate::core::Industry;
use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "airoi")]
#[command(about = "AI use case recommendations and ROI projections for small businesses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .airoi.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the use case catalog
    Catalog {
        /// Show the fit of every use case for this industry
        #[arg(short, long)]
        industry: Option<Industry>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Score pain points and recommend use cases
    Analyze {
        /// Questionnaire file (.toml or .json)
        input: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project ROI for up to three use cases under every scenario
    Project {
        /// Questionnaire file (.toml or .json)
        input: PathBuf,

        /// Use case to project (repeatable, up to three). Defaults to the
        /// top recommendations.
        #[arg(short = 'u', long = "use-case")]
        use_cases: Vec<String>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default .airoi.toml and a sample questionnaire
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// Log filter for a `-v` count. Warnings only by default.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
