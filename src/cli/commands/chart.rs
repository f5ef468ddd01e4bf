use crate::cli::commands::{open_session, style};
use crate::cli::parser::Commands;
use crate::config::{Config, SecretProvider};
use crate::core::session::{Action, handle as handle_action};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::chart::draw_meals_chart;
use crate::ui::messages::{success, warning};
use crate::ui::render::print_chart;
use crate::utils::path::{expand_tilde, export_file_name};
use std::fs;

/// Print the per-day totals and write the SVG line chart next to them.
pub fn handle(cmd: &Commands, cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    let Commands::Chart { dir, force } = cmd else {
        return Ok(());
    };

    let (mut pool, mut session) = open_session(cfg)?;

    let Some(person) = session.form.person().map(str::to_string) else {
        warning("Please enter your name first (--name or default_person in the config).");
        return Ok(());
    };

    let view = handle_action(&mut pool, &mut session, Action::Refresh, secrets)?;
    print_chart(&view.chart, &style(cfg));

    if view.chart.is_empty() {
        return Ok(());
    }

    let dir = expand_tilde(dir.as_deref().unwrap_or("."));
    fs::create_dir_all(&dir)?;
    let path = export_file_name(&dir, &person, "svg");
    ensure_writable(&path, *force)?;

    draw_meals_chart(&view.chart, &person, &path)?;
    success(format!("Chart written: {}", path.display()));

    ttlog_quiet(
        &pool.conn,
        "chart",
        &path.to_string_lossy(),
        &format!("Charted {} days", view.chart.len()),
    );

    Ok(())
}
