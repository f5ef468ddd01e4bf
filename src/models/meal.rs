use crate::core::calculator::{self, Totals};
use crate::models::meal_mode::MealMode;
use chrono::NaiveDate;
use serde::Serialize;

/// One persisted meal entry for a given person and date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecord {
    pub id: i64,
    pub person_name: Option<String>,
    pub meal_date: NaiveDate,
    pub mode: MealMode,
    pub lunch: Option<u32>,
    pub dinner: Option<u32>,
    pub total_meals: u32,
    pub meal_price: f64,
    pub total_amount: f64,
}

/// Values needed to insert a new row; totals are always derived.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeal {
    pub person_name: String,
    pub meal_date: NaiveDate,
    pub mode: MealMode,
    pub lunch: u32,
    pub dinner: u32,
    pub manual_total: u32,
    pub meal_price: f64,
}

impl NewMeal {
    pub fn totals(&self) -> Totals {
        calculator::calculate(
            self.mode,
            self.lunch,
            self.dinner,
            self.manual_total,
            self.meal_price,
        )
    }

    /// Lunch/dinner are only stored for Auto rows.
    pub fn stored_split(&self) -> (Option<u32>, Option<u32>) {
        match self.mode {
            MealMode::Auto => (Some(self.lunch), Some(self.dinner)),
            MealMode::Manual => (None, None),
        }
    }
}
