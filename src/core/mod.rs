//! Business profile data model.
//!
//! A calculation takes two immutable inputs: the [`CompanyProfile`] describing
//! who the company is, and the [`SituationMetrics`] describing how it currently
//! operates. Both are validated by the input layer before they reach the
//! scoring and ROI engine, which treats them as plain numbers.

pub mod profile;
pub mod situation;

pub use profile::{CompanyProfile, CompanySize, Industry, DEFAULT_HOURLY_WAGE};
pub use situation::SituationMetrics;
