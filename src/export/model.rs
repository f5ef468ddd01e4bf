// src/export/model.rs

use crate::models::meal::MealRecord;
use serde::Serialize;

/// Flat row for export; field order matches the `meals` table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MealExport {
    pub id: i64,
    pub meal_date: String,
    pub mode: String,
    pub lunch: Option<u32>,
    pub dinner: Option<u32>,
    pub total_meals: u32,
    pub meal_price: f64,
    pub total_amount: f64,
    pub person_name: String,
}

impl From<&MealRecord> for MealExport {
    fn from(r: &MealRecord) -> Self {
        Self {
            id: r.id,
            meal_date: r.meal_date.format("%Y-%m-%d").to_string(),
            mode: r.mode.to_db_str().to_string(),
            lunch: r.lunch,
            dinner: r.dinner,
            total_meals: r.total_meals,
            meal_price: r.meal_price,
            total_amount: r.total_amount,
            person_name: r.person_name.clone().unwrap_or_default(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "meal_date",
        "mode",
        "lunch",
        "dinner",
        "total_meals",
        "meal_price",
        "total_amount",
        "person_name",
    ]
}
