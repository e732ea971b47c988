// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod report;
pub mod roi;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{CompanyProfile, CompanySize, Industry, SituationMetrics};

pub use crate::catalog::{Catalog, UseCase, UseCaseCategory, CATALOG_VERSION};

pub use crate::errors::{Error, Result};

pub use crate::scoring::{
    calculate_pain_score, recommend_use_cases, PainLevel, PainScores, Recommendation, Score0To1,
};

pub use crate::roi::{calculate_roi, ROIResult, Scenario};

pub use crate::report::{
    analyze, generate_comparison_report, AnalysisReport, ComparisonReport, UseCaseProjection,
    UseCaseSelection,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
