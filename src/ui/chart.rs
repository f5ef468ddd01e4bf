//! Meals-per-day line chart, written as SVG.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (800, 400);
const LINE_COLOR: RGBColor = RGBColor(47, 117, 181);

fn chart_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

/// Plot total meals per date (`points` ascending) as a line with one dot per day.
///
/// The x axis counts days from the first date, so gaps between entries keep
/// their real width.
pub fn draw_meals_chart(points: &[(NaiveDate, u64)], person: &str, path: &Path) -> AppResult<()> {
    let Some(&(first, _)) = points.first() else {
        return Err(AppError::Chart("no data to chart".into()));
    };
    let last = points.last().map(|(d, _)| *d).unwrap_or(first);

    let span = (last - first).num_days().max(1);
    let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);

    let series: Vec<(i64, u64)> = points
        .iter()
        .map(|(d, v)| ((*d - first).num_days(), *v))
        .collect();

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Meals per day: {}", person.trim()), ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0i64..span, 0u64..max + 1)
        .map_err(chart_err)?;

    let date_label = |x: &i64| (first + Duration::days(*x)).format("%m-%d").to_string();

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Total meals")
        .x_labels(points.len().clamp(2, 10))
        .x_label_formatter(&date_label)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            series.iter().copied(),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(chart_err)?;

    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, LINE_COLOR.filled())),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
