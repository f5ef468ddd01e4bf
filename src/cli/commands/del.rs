use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::{Config, SecretProvider};
use crate::core::session::{Action, handle as handle_action};
use crate::db::queries::get_meal;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use crate::ui::render::print_notices;

pub fn handle(cmd: &Commands, cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let (mut pool, mut session) = open_session(cfg)?;

        //
        // Confirmation prompt (only when there is something to delete)
        //
        if !*yes && let Some(rec) = get_meal(&pool.conn, *id)? {
            let prompt = format!(
                "Delete record #{} ({}, {} meals)? This action is irreversible.",
                rec.id, rec.meal_date, rec.total_meals
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let view = handle_action(&mut pool, &mut session, Action::Delete { id: *id }, secrets)?;
        print_notices(&view);
    }

    Ok(())
}
