//! Configuration for airoi.
//!
//! Configuration lives in `.airoi.toml`, found by walking up from the
//! working directory or named explicitly with `--config`. Every section is
//! optional:
//!
//! - `[defaults]`: values for questionnaire fields an input file leaves out
//! - `[output]`: the default output format
//! - `[[use_cases]]`: extra catalog entries

mod core;
mod loader;

pub use self::core::{AiroiConfig, DefaultsConfig, OutputConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Commented default configuration written by `airoi init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# airoi configuration

# Values used when an input file leaves a field out.
[defaults]
avg_hourly_wage = 35.0
weekly_hours_per_employee = 40.0
manual_work_percentage = 30.0
affected_employees_percentage = 50.0
processing_time_per_task = 30.0   # minutes
tasks_per_day = 50.0
error_rate = 5.0                  # percent
cost_per_error = 50.0
avg_response_time = 24.0          # hours
customer_satisfaction = 70.0      # percent
support_tickets_per_month = 500.0
customer_acquisition_cost = 200.0
avg_customer_value = 1000.0
customer_retention_rate = 80.0    # percent

[output]
default_format = "terminal"

# Additional use cases are appended after the built-in catalog.
# [[use_cases]]
# id = "invoice_matching"
# name = "Invoice matching"
# category = "automation"        # automation | customer-interaction | data-analysis | other
# setup_cost = 4000
# monthly_cost = 120
# [use_cases.benefits]
# time_savings_percentage = 25
# [use_cases.industry_fit]
# finance = 0.95
"#;
