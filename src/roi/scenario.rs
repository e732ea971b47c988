use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Projection scenario. Scales every benefit through the effectiveness
/// factor.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    #[default]
    Realistic,
    Optimistic,
}

impl Scenario {
    /// All scenarios, from most to least cautious.
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Realistic,
        Scenario::Optimistic,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            Scenario::Conservative => 0.6,
            Scenario::Realistic => 1.0,
            Scenario::Optimistic => 1.4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Conservative => "conservative",
            Scenario::Realistic => "realistic",
            Scenario::Optimistic => "optimistic",
        }
    }

    /// Parse a scenario name, falling back to [`Scenario::Realistic`] for
    /// anything unrecognized.
    pub fn from_name_or_realistic(name: &str) -> Self {
        name.parse().unwrap_or(Scenario::Realistic)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown scenario '{}'", s))
    }
}
