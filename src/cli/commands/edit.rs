use crate::cli::commands::{open_session, style};
use crate::cli::parser::Commands;
use crate::config::{Config, SecretProvider};
use crate::core::session::{Action, handle as handle_action};
use crate::db::queries::get_meal;
use crate::errors::AppResult;
use crate::ui::render::{print_notices, records_table};

/// Update lunch/dinner/price of an existing record.
pub fn handle(cmd: &Commands, cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    if let Commands::Edit {
        id,
        lunch,
        dinner,
        price,
    } = cmd
    {
        let (mut pool, mut session) = open_session(cfg)?;

        let action = Action::Update {
            id: *id,
            lunch: *lunch,
            dinner: *dinner,
            price: *price,
        };
        let view = handle_action(&mut pool, &mut session, action, secrets)?;
        print_notices(&view);

        if let Some(updated) = get_meal(&pool.conn, *id)? {
            print!("{}", records_table(&[updated], &style(cfg)));
        }
    }
    Ok(())
}
