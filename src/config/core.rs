use crate::catalog::{Catalog, UseCase};
use crate::core::{SituationMetrics, DEFAULT_HOURLY_WAGE};
use crate::errors::Result;
use crate::io::input::situation_problems;
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure for airoi
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AiroiConfig {
    /// Defaults for questionnaire fields the input leaves out
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Extra catalog entries, appended after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<UseCase>,
}

/// Questionnaire defaults. Any situation field may be overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_hourly_wage")]
    pub avg_hourly_wage: f64,

    #[serde(flatten)]
    pub situation: SituationMetrics,

    /// Keys left over after the situation fields. Reported by `validate`.
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unknown: BTreeMap<String, toml::Value>,
}

fn default_hourly_wage() -> f64 {
    DEFAULT_HOURLY_WAGE
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            avg_hourly_wage: DEFAULT_HOURLY_WAGE,
            situation: SituationMetrics::default(),
            unknown: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

impl AiroiConfig {
    pub fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    /// Output format used when the command line does not name one.
    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.default_format)
            .unwrap_or(OutputFormat::Terminal)
    }

    /// Built-in catalog extended with the configured use cases.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::with_extensions(self.use_cases.clone())
    }

    /// Check the configured numbers. Returns every problem found.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if let Some(defaults) = &self.defaults {
            if !defaults.avg_hourly_wage.is_finite() || defaults.avg_hourly_wage < 0.0 {
                problems.push(format!(
                    "defaults.avg_hourly_wage must be a non-negative number (got {})",
                    defaults.avg_hourly_wage
                ));
            }
            problems.extend(
                defaults
                    .unknown
                    .keys()
                    .map(|key| format!("defaults.{} is not a known field", key)),
            );
            problems.extend(
                situation_problems(&defaults.situation)
                    .into_iter()
                    .map(|problem| format!("defaults.{}", problem)),
            );
        }

        for use_case in &self.use_cases {
            if let Err(errs) = use_case.validate() {
                problems.extend(errs);
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
