//! Pain-point scoring.
//!
//! Three normalized measures of how acute a problem area is, derived from the
//! self-reported [`SituationMetrics`]. Each input term is capped before it is
//! weighted, and the weighted sum is clamped to [0, 1].

use super::score_types::Score0To1;
use crate::core::SituationMetrics;
use serde::Serialize;

/// Processing times are normalized against one hour per task.
const PROCESSING_TIME_UNIT_MINUTES: f64 = 60.0;
/// Processing time stops adding pain after two hours per task.
const PROCESSING_TIME_CAP: f64 = 2.0;
const SLOW_RESPONSE_HOURS: f64 = 48.0;
const SCALING_RESPONSE_HOURS: f64 = 24.0;
const HIGH_TICKET_VOLUME: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PainScores {
    pub efficiency: Score0To1,
    pub customer_service: Score0To1,
    pub scaling: Score0To1,
}

impl PainScores {
    /// Scores paired with a display name, in a fixed order.
    pub fn named(&self) -> [(&'static str, Score0To1); 3] {
        [
            ("Efficiency", self.efficiency),
            ("Customer service", self.customer_service),
            ("Scaling", self.scaling),
        ]
    }
}

/// Severity band of a pain score, used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PainLevel {
    Low,
    Moderate,
    High,
}

impl PainLevel {
    pub fn of(score: Score0To1) -> Self {
        match score.value() {
            v if v < 0.3 => PainLevel::Low,
            v if v < 0.6 => PainLevel::Moderate,
            _ => PainLevel::High,
        }
    }
}

/// Score the three pain areas. Pure, total, never fails.
///
/// ```rust
/// use airoi::core::SituationMetrics;
/// use airoi::scoring::calculate_pain_score;
///
/// let situation = SituationMetrics {
///     manual_work_percentage: 30.0,
///     error_rate: 5.0,
///     processing_time_per_task: 30.0,
///     ..SituationMetrics::default()
/// };
/// let pain = calculate_pain_score(&situation);
/// assert!((pain.efficiency.value() - 0.21).abs() < 1e-9);
/// ```
pub fn calculate_pain_score(situation: &SituationMetrics) -> PainScores {
    let processing_load = (situation.processing_time_per_task / PROCESSING_TIME_UNIT_MINUTES)
        .min(PROCESSING_TIME_CAP)
        / PROCESSING_TIME_CAP;
    let efficiency = 0.4 * (situation.manual_work_percentage / 100.0)
        + 0.3 * processing_load
        + 0.3 * (situation.error_rate / 100.0);

    let customer_service = 0.5 * (situation.avg_response_time / SLOW_RESPONSE_HOURS).min(1.0)
        + 0.5 * ((100.0 - situation.customer_satisfaction) / 100.0);

    let scaling = 0.6 * (situation.support_tickets_per_month / HIGH_TICKET_VOLUME).min(1.0)
        + 0.4 * (situation.avg_response_time / SCALING_RESPONSE_HOURS).min(1.0);

    let scores = PainScores {
        efficiency: Score0To1::new(efficiency),
        customer_service: Score0To1::new(customer_service),
        scaling: Score0To1::new(scaling),
    };
    tracing::trace!(?scores, "pain scores");
    scores
}
