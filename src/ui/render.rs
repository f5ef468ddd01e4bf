//! Terminal rendering of a `View`.

use crate::core::session::View;
use crate::core::summary::{Aggregate, MonthlyRow};
use crate::models::feedback::FeedbackRecord;
use crate::models::meal::MealRecord;
use crate::ui::messages::{header, notice};
use crate::utils::colors::{GREY, RESET, colorize_rating};
use crate::utils::date::local_timestamp;
use crate::utils::formatting::{bold, money, plain_number};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Display settings taken from the configuration.
#[derive(Debug, Clone)]
pub struct Style {
    pub currency: String,
    pub separator: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            separator: "-".to_string(),
        }
    }
}

pub fn print_notices(view: &View) {
    for n in &view.notices {
        notice(n);
    }
}

pub fn print_entry(view: &View, style: &Style) {
    header("📊 Meal Summary");
    println!("Date:        {}", view.entry.meal_date);
    println!("Mode:        {}", view.entry.mode);
    println!("Total Meals: {}", view.entry.totals.total_meals);
    println!(
        "{}",
        bold(&format!(
            "💰 Total Amount: {}",
            money(view.entry.totals.total_amount, &style.currency)
        ))
    );
}

pub fn records_table(records: &[MealRecord], style: &Style) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Mode"),
        Column::right("Lunch"),
        Column::right("Dinner"),
        Column::right("Meals"),
        Column::right("Price"),
        Column::right("Amount"),
    ])
    .with_separator(&style.separator);

    let opt = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "--".into());

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.meal_date.to_string(),
            r.mode.to_string(),
            opt(r.lunch),
            opt(r.dinner),
            r.total_meals.to_string(),
            plain_number(r.meal_price),
            money(r.total_amount, &style.currency),
        ]);
    }

    table.render()
}

pub fn print_records(view: &View, style: &Style) {
    header("📁 Saved Records");
    match &view.person {
        None => println!("{GREY}Enter a name to see saved records.{RESET}"),
        Some(p) if view.records.is_empty() => println!("No records found for {}.", p),
        Some(p) => {
            println!("Person: {}\n", p);
            print!("{}", records_table(&view.records, style));
        }
    }
}

pub fn print_totals(totals: &Aggregate, style: &Style) {
    println!(
        "\nTotal meals: {}   Total amount: {}",
        totals.total_meals,
        money(totals.total_amount, &style.currency)
    );
}

pub fn monthly_table(rows: &[MonthlyRow], style: &Style) -> String {
    let mut table = Table::new(vec![
        Column::left("Month"),
        Column::right("Meals"),
        Column::right("Amount"),
    ])
    .with_separator(&style.separator);

    for m in rows {
        table.add_row(vec![
            m.label(),
            m.total_meals.to_string(),
            money(m.total_amount, &style.currency),
        ]);
    }
    table.render()
}

pub fn print_monthly(view: &View, style: &Style) {
    header("🗓️ Monthly Summary");
    if view.monthly.is_empty() {
        println!("No data.");
    } else {
        print!("{}", monthly_table(&view.monthly, style));
    }
}

/// Text counterpart of the SVG chart: one row per date.
pub fn daily_table(points: &[(NaiveDate, u64)], style: &Style) -> String {
    let mut table = Table::new(vec![Column::left("Date"), Column::right("Meals")])
        .with_separator(&style.separator);
    for (d, meals) in points {
        table.add_row(vec![d.to_string(), meals.to_string()]);
    }
    table.render()
}

pub fn print_chart(points: &[(NaiveDate, u64)], style: &Style) {
    header("📈 Meals per Day");
    if points.is_empty() {
        println!("No data to chart.");
    } else {
        print!("{}", daily_table(points, style));
    }
}

pub fn print_inbox(inbox: &[FeedbackRecord]) {
    header("📬 Feedback Inbox");
    if inbox.is_empty() {
        println!("No feedback yet.");
        return;
    }
    for f in inbox {
        let who = if f.person_name.is_empty() {
            "anonymous"
        } else {
            f.person_name.as_str()
        };
        println!(
            "#{} {} {} {GREY}{}{RESET}",
            f.id,
            colorize_rating(f.rating),
            who,
            local_timestamp(&f.created_at)
        );
        println!("    {}", f.message);
    }
}

/// Whole page, inbox last.
pub fn print_view(view: &View, style: &Style) {
    print_notices(view);
    print_entry(view, style);
    print_records(view, style);
    if !view.records.is_empty() {
        print_totals(&view.totals, style);
        print_monthly(view, style);
        print_chart(&view.chart, style);
    }
    if let Some(inbox) = &view.inbox {
        print_inbox(inbox);
    }
}
