//! Questionnaire input files.
//!
//! This is the form layer: it reads a profile file, fills in defaults for
//! every situation field the file leaves out, and rejects incomplete or
//! out-of-range answers before anything reaches the engine.
//!
//! ```toml
//! [company]
//! industry = "it-software"      # or the label, e.g. "IT/Software"
//! company_size = "medium"       # optional, informational
//! monthly_revenue = 500000
//! employee_count = 100
//! avg_hourly_wage = 42          # optional
//!
//! [situation]                   # optional, any subset of fields
//! manual_work_percentage = 40
//! error_rate = 8
//! ```

use crate::config::DefaultsConfig;
use crate::core::{CompanyProfile, CompanySize, Industry, SituationMetrics};
use crate::errors::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Encoding of an input file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

/// Validated questionnaire answers, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireInput {
    pub company: CompanyProfile,
    pub situation: SituationMetrics,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    company: Option<RawCompany>,
    #[serde(default)]
    situation: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCompany {
    industry: Option<String>,
    company_size: Option<CompanySize>,
    monthly_revenue: Option<f64>,
    employee_count: Option<f64>,
    avg_hourly_wage: Option<f64>,
}

/// Read and validate an input file.
pub fn load_input(path: &Path, defaults: &DefaultsConfig) -> Result<QuestionnaireInput> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::input(path, format!("cannot read file: {}", e)))?;
    let input = parse_input(&contents, InputFormat::from_path(path), defaults).map_err(|e| {
        match e {
            Error::Json(_) | Error::Toml(_) => Error::input(path, e.to_string()),
            other => other,
        }
    })?;
    tracing::debug!(
        industry = %input.company.industry,
        employees = input.company.employee_count,
        "loaded questionnaire from {}",
        path.display()
    );
    Ok(input)
}

/// Parse and validate questionnaire text.
pub fn parse_input(
    contents: &str,
    format: InputFormat,
    defaults: &DefaultsConfig,
) -> Result<QuestionnaireInput> {
    let raw: RawInput = match format {
        InputFormat::Toml => toml::from_str(contents)?,
        InputFormat::Json => serde_json::from_str(contents)?,
    };

    let mut problems = Vec::new();
    let company = build_company(raw.company.unwrap_or_default(), defaults, &mut problems);
    let situation = build_situation(raw.situation, defaults, &mut problems);

    match (company, situation) {
        (Some(company), Some(situation)) if problems.is_empty() => {
            Ok(QuestionnaireInput { company, situation })
        }
        _ => Err(Error::Validation(problems.join("; "))),
    }
}

fn build_company(
    raw: RawCompany,
    defaults: &DefaultsConfig,
    problems: &mut Vec<String>,
) -> Option<CompanyProfile> {
    let industry = match raw.industry.as_deref() {
        None => {
            problems.push("company.industry is required".to_string());
            None
        }
        Some(name) => name
            .parse::<Industry>()
            .map_err(|e| problems.push(format!("company.industry: {}", e)))
            .ok(),
    };

    let employee_count = match raw.employee_count {
        None => {
            problems.push("company.employee_count is required".to_string());
            None
        }
        Some(count) if count.is_nan() || count < 1.0 => {
            problems.push(format!(
                "company.employee_count must be at least 1 (got {})",
                count
            ));
            None
        }
        Some(count) if count > f64::from(u32::MAX) => {
            problems.push(format!(
                "company.employee_count must not exceed {} (got {})",
                u32::MAX,
                count
            ));
            None
        }
        Some(count) if count.fract() != 0.0 => {
            problems.push(format!(
                "company.employee_count must be a whole number (got {})",
                count
            ));
            None
        }
        Some(count) => Some(count as u32),
    };

    let monthly_revenue = raw.monthly_revenue.unwrap_or(0.0);
    let avg_hourly_wage = raw.avg_hourly_wage.unwrap_or(defaults.avg_hourly_wage);
    for (field, value) in [
        ("monthly_revenue", monthly_revenue),
        ("avg_hourly_wage", avg_hourly_wage),
    ] {
        if let Some(problem) = non_negative_problem(field, value) {
            problems.push(format!("company.{}", problem));
        }
    }

    Some(CompanyProfile {
        industry: industry?,
        company_size: raw.company_size,
        monthly_revenue,
        employee_count: employee_count?,
        avg_hourly_wage,
    })
}

fn build_situation(
    answers: Map<String, Value>,
    defaults: &DefaultsConfig,
    problems: &mut Vec<String>,
) -> Option<SituationMetrics> {
    let mut merged = match serde_json::to_value(&defaults.situation) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    for (key, value) in answers {
        if !merged.contains_key(&key) {
            problems.push(format!("situation.{} is not a known field", key));
            continue;
        }
        if !value.is_number() {
            problems.push(format!("situation.{} must be a number", key));
            continue;
        }
        merged.insert(key, value);
    }

    let situation: SituationMetrics = match serde_json::from_value(Value::Object(merged)) {
        Ok(situation) => situation,
        Err(e) => {
            problems.push(format!("situation: {}", e));
            return None;
        }
    };

    problems.extend(
        situation_problems(&situation)
            .into_iter()
            .map(|problem| format!("situation.{}", problem)),
    );
    Some(situation)
}

fn non_negative_problem(field: &str, value: f64) -> Option<String> {
    (!value.is_finite() || value < 0.0)
        .then(|| format!("{} must be a non-negative number (got {})", field, value))
}

/// Range problems in a situation record: every field must be a finite,
/// non-negative number, and percentage fields may not exceed 100.
pub fn situation_problems(situation: &SituationMetrics) -> Vec<String> {
    situation
        .fields()
        .into_iter()
        .filter_map(|(field, value)| {
            non_negative_problem(field, value).or_else(|| {
                (SituationMetrics::PERCENT_FIELDS.contains(&field) && value > 100.0)
                    .then(|| format!("{} must not exceed 100 (got {})", field, value))
            })
        })
        .collect()
}

/// Sample input written by `airoi init`.
pub const SAMPLE_INPUT: &str = r#"# airoi questionnaire

[company]
industry = "services"
company_size = "medium"
monthly_revenue = 500000
employee_count = 100
avg_hourly_wage = 35

# Leave out any field to use the configured default.
[situation]
weekly_hours_per_employee = 40
manual_work_percentage = 40
affected_employees_percentage = 50
processing_time_per_task = 45
tasks_per_day = 80
error_rate = 8
cost_per_error = 75
avg_response_time = 36
customer_satisfaction = 65
support_tickets_per_month = 800
"#;
