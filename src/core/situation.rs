use serde::{Deserialize, Serialize};

/// Current operational state of the company, as self-reported in the
/// questionnaire.
///
/// Percentages are on a 0-100 scale, times are in the unit named by the
/// field. The engine only assumes non-negative numbers; range checks belong to
/// the input layer (see [`crate::io::input`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SituationMetrics {
    pub weekly_hours_per_employee: f64,
    /// Share of working time spent on manual, repetitive work (%).
    pub manual_work_percentage: f64,
    /// Share of the workforce the use cases would touch (%).
    pub affected_employees_percentage: f64,
    /// Minutes per processed task.
    pub processing_time_per_task: f64,
    pub tasks_per_day: f64,
    /// Share of tasks that end in an error (%).
    pub error_rate: f64,
    pub cost_per_error: f64,
    /// Average customer response time in hours.
    pub avg_response_time: f64,
    /// Customer satisfaction (%).
    pub customer_satisfaction: f64,
    pub support_tickets_per_month: f64,

    // Informational KPIs, collected but not read by any formula.
    pub customer_acquisition_cost: f64,
    pub avg_customer_value: f64,
    pub customer_retention_rate: f64,
}

impl Default for SituationMetrics {
    fn default() -> Self {
        Self {
            weekly_hours_per_employee: 40.0,
            manual_work_percentage: 30.0,
            affected_employees_percentage: 50.0,
            processing_time_per_task: 30.0,
            tasks_per_day: 50.0,
            error_rate: 5.0,
            cost_per_error: 50.0,
            avg_response_time: 24.0,
            customer_satisfaction: 70.0,
            support_tickets_per_month: 500.0,
            customer_acquisition_cost: 200.0,
            avg_customer_value: 1000.0,
            customer_retention_rate: 80.0,
        }
    }
}

impl SituationMetrics {
    /// Every field paired with its name, in declaration order. Used by the
    /// input layer to report violations by field.
    pub fn fields(&self) -> [(&'static str, f64); 13] {
        [
            ("weekly_hours_per_employee", self.weekly_hours_per_employee),
            ("manual_work_percentage", self.manual_work_percentage),
            ("affected_employees_percentage", self.affected_employees_percentage),
            ("processing_time_per_task", self.processing_time_per_task),
            ("tasks_per_day", self.tasks_per_day),
            ("error_rate", self.error_rate),
            ("cost_per_error", self.cost_per_error),
            ("avg_response_time", self.avg_response_time),
            ("customer_satisfaction", self.customer_satisfaction),
            ("support_tickets_per_month", self.support_tickets_per_month),
            ("customer_acquisition_cost", self.customer_acquisition_cost),
            ("avg_customer_value", self.avg_customer_value),
            ("customer_retention_rate", self.customer_retention_rate),
        ]
    }

    /// Fields that are percentages and therefore capped at 100.
    pub const PERCENT_FIELDS: [&'static str; 5] = [
        "manual_work_percentage",
        "affected_employees_percentage",
        "error_rate",
        "customer_satisfaction",
        "customer_retention_rate",
    ];
}
