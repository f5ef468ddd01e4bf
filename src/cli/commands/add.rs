use crate::cli::commands::{open_session, style};
use crate::cli::parser::Commands;
use crate::config::{Config, SecretProvider};
use crate::core::session::{Action, handle as handle_action};
use crate::errors::{AppError, AppResult};
use crate::models::meal_mode::MealMode;
use crate::ui::render::{print_entry, print_notices};
use crate::utils::date;

/// Save one meal record for the current person.
pub fn handle(cmd: &Commands, cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        lunch,
        dinner,
        total,
        price,
    } = cmd
    {
        let (mut pool, mut session) = open_session(cfg)?;

        //
        // 1. Fill the form
        //
        if let Some(d) = date_arg {
            session.form.meal_date =
                date::parse_date_keyword(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        }

        match total {
            Some(t) => {
                session.form.mode = MealMode::Manual;
                session.form.manual_total = *t;
            }
            None => {
                session.form.mode = MealMode::Auto;
                session.form.lunch = lunch.unwrap_or(0);
                session.form.dinner = dinner.unwrap_or(0);
            }
        }
        session.form.meal_price = *price;

        //
        // 2. Save
        //
        let view = handle_action(&mut pool, &mut session, Action::Save, secrets)?;

        print_notices(&view);
        print_entry(&view, &style(cfg));
    }

    Ok(())
}
