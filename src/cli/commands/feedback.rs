use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, FeedbackCommand};
use crate::config::{Config, SecretProvider};
use crate::core::session::{Action, handle as handle_action};
use crate::errors::AppResult;
use crate::ui::render::{print_inbox, print_notices};
use std::io::{self, Write};

fn read_password() -> AppResult<String> {
    print!("Admin password: ");
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

pub fn handle(cmd: &Commands, cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    let Commands::Feedback { action } = cmd else {
        return Ok(());
    };

    let (mut pool, mut session) = open_session(cfg)?;

    match action {
        FeedbackCommand::Send { message, rating } => {
            let view = handle_action(
                &mut pool,
                &mut session,
                Action::SubmitFeedback {
                    message: message.clone(),
                    rating: *rating,
                },
                secrets,
            )?;
            print_notices(&view);
        }

        FeedbackCommand::List { password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => read_password()?,
            };

            session.admin.login(&password, secrets)?;

            let view = handle_action(&mut pool, &mut session, Action::Refresh, secrets)?;
            if let Some(inbox) = &view.inbox {
                print_inbox(inbox);
            }
        }

        FeedbackCommand::Del { id, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => read_password()?,
            };

            session.admin.login(&password, secrets)?;

            let view = handle_action(
                &mut pool,
                &mut session,
                Action::DeleteFeedback { id: *id },
                secrets,
            )?;
            print_notices(&view);
        }
    }

    Ok(())
}
