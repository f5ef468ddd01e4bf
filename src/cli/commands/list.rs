use crate::cli::commands::{open_session, style};
use crate::config::{Config, SecretProvider};
use crate::core::session::{Action, handle as handle_action};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::render::{print_monthly, print_records, print_totals};

pub fn handle(cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    let (mut pool, mut session) = open_session(cfg)?;

    if session.form.person().is_none() {
        warning("Please enter your name first (--name or default_person in the config).");
        return Ok(());
    }

    let view = handle_action(&mut pool, &mut session, Action::Refresh, secrets)?;
    let style = style(cfg);

    print_records(&view, &style);
    if !view.records.is_empty() {
        print_totals(&view.totals, &style);
        print_monthly(&view, &style);
    }

    Ok(())
}
