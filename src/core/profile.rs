use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fully-loaded hourly wage assumed when the profile leaves it out.
pub const DEFAULT_HOURLY_WAGE: f64 = 35.0;

/// Industry a company operates in. Drives the industry-fit lookup of every
/// catalog entry.
///
/// Serialized as its id. Deserialized through [`FromStr`], so config keys and
/// input values accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Manufacturing,
    Retail,
    Finance,
    Healthcare,
    Logistics,
    Services,
    ItSoftware,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Logistics,
        Industry::Services,
        Industry::ItSoftware,
        Industry::Other,
    ];

    /// Stable identifier used in config and input files.
    pub fn id(self) -> &'static str {
        match self {
            Industry::Manufacturing => "manufacturing",
            Industry::Retail => "retail",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Logistics => "logistics",
            Industry::Services => "services",
            Industry::ItSoftware => "it-software",
            Industry::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Industry::Manufacturing => "Manufacturing",
            Industry::Retail => "Retail",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
            Industry::Logistics => "Logistics",
            Industry::Services => "Services",
            Industry::ItSoftware => "IT/Software",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = String;

    /// Accepts either the identifier (`it-software`) or the label
    /// (`IT/Software`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Industry::ALL
            .into_iter()
            .find(|industry| {
                industry.id().eq_ignore_ascii_case(needle)
                    || industry.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Industry::ALL.iter().map(|i| i.id()).collect();
                format!("unknown industry '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

impl<'de> Deserialize<'de> for Industry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Headcount bracket. Informational only, no formula reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub fn label(self) -> &'static str {
        match self {
            CompanySize::Small => "Small (1-50 employees)",
            CompanySize::Medium => "Medium (51-250 employees)",
            CompanySize::Large => "Large (251-1000 employees)",
            CompanySize::Enterprise => "Enterprise (>1000 employees)",
        }
    }

    /// Bracket a raw headcount falls into.
    pub fn from_headcount(employees: u32) -> Self {
        match employees {
            0..=50 => CompanySize::Small,
            51..=250 => CompanySize::Medium,
            251..=1000 => CompanySize::Large,
            _ => CompanySize::Enterprise,
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who the company is. Immutable for the duration of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub industry: Industry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<CompanySize>,
    /// Monthly revenue in currency units.
    #[serde(default)]
    pub monthly_revenue: f64,
    pub employee_count: u32,
    /// Average fully-loaded hourly wage in currency units.
    #[serde(default = "default_hourly_wage")]
    pub avg_hourly_wage: f64,
}

fn default_hourly_wage() -> f64 {
    DEFAULT_HOURLY_WAGE
}

impl CompanyProfile {
    pub fn new(industry: Industry, employee_count: u32) -> Self {
        Self {
            industry,
            company_size: None,
            monthly_revenue: 0.0,
            employee_count,
            avg_hourly_wage: DEFAULT_HOURLY_WAGE,
        }
    }

    pub fn with_monthly_revenue(mut self, monthly_revenue: f64) -> Self {
        self.monthly_revenue = monthly_revenue;
        self
    }

    pub fn with_hourly_wage(mut self, avg_hourly_wage: f64) -> Self {
        self.avg_hourly_wage = avg_hourly_wage;
        self
    }

    pub fn with_size(mut self, size: CompanySize) -> Self {
        self.company_size = Some(size);
        self
    }

    /// Declared size, or the bracket implied by the headcount.
    pub fn effective_size(&self) -> CompanySize {
        self.company_size
            .unwrap_or_else(|| CompanySize::from_headcount(self.employee_count))
    }
}
