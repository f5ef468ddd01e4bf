//! Meal count and cost arithmetic.

use crate::models::meal_mode::MealMode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Totals {
    pub total_meals: u32,
    pub total_amount: f64,
}

/// Compute the totals for one entry.
///
/// Auto mode sums lunch and dinner, Manual mode takes `manual_total` as is.
/// The amount is a plain multiply and is never rounded.
pub fn calculate(mode: MealMode, lunch: u32, dinner: u32, manual_total: u32, price: f64) -> Totals {
    let total_meals = match mode {
        MealMode::Auto => lunch.saturating_add(dinner),
        MealMode::Manual => manual_total,
    };

    Totals {
        total_meals,
        total_amount: amount(total_meals, price),
    }
}

/// Totals for an edited row: always lunch + dinner.
pub fn calculate_split(lunch: u32, dinner: u32, price: f64) -> Totals {
    calculate(MealMode::Auto, lunch, dinner, 0, price)
}

pub fn amount(total_meals: u32, price: f64) -> f64 {
    f64::from(total_meals) * price
}
