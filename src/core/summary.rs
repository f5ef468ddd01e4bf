//! Aggregates over a person's meal records.

use crate::models::meal::MealRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Aggregate {
    pub total_meals: u64,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    pub year: i32,
    pub month: u32,
    pub total_meals: u64,
    pub total_amount: f64,
}

impl MonthlyRow {
    /// `YYYY-MM`
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Sum of meals and amounts across `rows` (zero when empty).
pub fn totals(rows: &[MealRecord]) -> Aggregate {
    rows.iter().fold(Aggregate::default(), |mut acc, r| {
        acc.total_meals += u64::from(r.total_meals);
        acc.total_amount += r.total_amount;
        acc
    })
}

/// One row per distinct (year, month), ascending.
pub fn monthly(rows: &[MealRecord]) -> Vec<MonthlyRow> {
    let mut groups: BTreeMap<(i32, u32), Aggregate> = BTreeMap::new();

    for r in rows {
        let key = (r.meal_date.year(), r.meal_date.month());
        let entry = groups.entry(key).or_default();
        entry.total_meals += u64::from(r.total_meals);
        entry.total_amount += r.total_amount;
    }

    groups
        .into_iter()
        .map(|((year, month), agg)| MonthlyRow {
            year,
            month,
            total_meals: agg.total_meals,
            total_amount: agg.total_amount,
        })
        .collect()
}

/// Total meals per date, duplicates on the same date summed, ascending.
pub fn daily_meals(rows: &[MealRecord]) -> Vec<(NaiveDate, u64)> {
    let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for r in rows {
        *days.entry(r.meal_date).or_default() += u64::from(r.total_meals);
    }
    days.into_iter().collect()
}
