//! Pain-point scoring and use case ranking.
//!
//! Both steps are pure functions of the business profile, the situation
//! metrics and the catalog. Nothing is cached between calls.

pub mod pain;
pub mod recommend;
pub mod score_types;

pub use pain::{calculate_pain_score, PainLevel, PainScores};
pub use recommend::{
    pain_relevance, rank, recommend_use_cases, score_use_cases, Recommendation,
    DEFAULT_RANKING_FIT, MAX_RECOMMENDATIONS,
};
pub use score_types::Score0To1;
