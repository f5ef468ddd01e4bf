use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum MealMode {
    /// Lunch + dinner
    #[default]
    Auto,
    /// Total meals entered directly
    Manual,
}

impl MealMode {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MealMode::Auto => "Auto",
            MealMode::Manual => "Manual",
        }
    }

    /// Convert DB string → enum.
    ///
    /// Older databases store the long labels ("Auto (Lunch + Dinner)",
    /// "Manual (Total Meals)"), so only the prefix is significant.
    pub fn from_db_str(s: &str) -> Self {
        if s.trim_start().starts_with("Auto") {
            MealMode::Auto
        } else {
            MealMode::Manual
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "a" | "auto" => Some(MealMode::Auto),
            "m" | "manual" => Some(MealMode::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for MealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
