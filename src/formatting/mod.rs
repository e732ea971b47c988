//! Display formatting for the presentation layer.
//!
//! Currency follows German conventions (`1.234.567 €`, no decimals),
//! percentages carry one decimal, and an infinite payback period is shown as
//! `never`.

use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Color mode implied by the environment (`NO_COLOR`, `CLICOLOR`,
    /// `CLICOLOR_FORCE`).
    pub fn from_env() -> Self {
        // NO_COLOR per no-color.org
        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|val| val == "1") {
            return Self::Always;
        }
        if env::var("CLICOLOR").is_ok_and(|val| val == "0") {
            return Self::Never;
        }
        Self::Auto
    }

    /// Make the `colored` crate follow this mode for the rest of the process.
    pub fn apply(self) {
        colored::control::set_override(self.should_use_color());
    }
}

/// Whole currency units with `.` thousands separators and a trailing euro
/// sign.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits, '.');
    if rounded < 0.0 {
        format!("-{} €", grouped)
    } else {
        format!("{} €", grouped)
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_months(months: f64) -> String {
    if months.is_finite() {
        format!("{:.1} months", months)
    } else {
        "never".to_string()
    }
}
