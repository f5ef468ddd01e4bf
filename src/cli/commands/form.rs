//! Interactive form session.
//!
//! One `Session` lives for the whole loop; every line is either a field
//! edit or an action handed to `core::session::handle`, after which the
//! page is rendered again.

use crate::cli::commands::{open_session, style};
use crate::config::{Config, SecretProvider};
use crate::core::session::{Action, Notice, Session, handle as handle_action};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::meal_mode::MealMode;
use crate::ui::messages::{error, info};
use crate::ui::render::{Style, print_entry, print_view};
use crate::utils::date;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Fields:   name NAME | date YYYY-MM-DD | mode auto|manual
          lunch N | dinner N | total N | price P
Actions:  save | reset | show
          edit ID LUNCH DINNER PRICE | del ID
          feedback RATING MESSAGE
Admin:    login PASSWORD | logout | inbox | drop ID
Other:    help | quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum FormInput {
    Name(String),
    Date(chrono::NaiveDate),
    Mode(MealMode),
    Lunch(u32),
    Dinner(u32),
    Total(u32),
    Price(f64),
    Act(Action),
    Inbox,
    Help,
    Quit,
}

fn number<T: std::str::FromStr>(arg: Option<&str>, what: &str) -> Result<T, String> {
    let raw = arg.ok_or_else(|| format!("missing {what}"))?;
    raw.parse()
        .map_err(|_| format!("invalid {what}: '{raw}'"))
}

fn price(arg: Option<&str>) -> Result<f64, String> {
    crate::cli::parser::parse_price(arg.ok_or("missing price")?)
}

/// Parse one line; `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<FormInput>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let input = match cmd.to_lowercase().as_str() {
        "name" => FormInput::Name(rest.to_string()),
        "date" => FormInput::Date(
            date::parse_date_keyword(rest).ok_or_else(|| format!("invalid date: '{rest}'"))?,
        ),
        "mode" => FormInput::Mode(
            MealMode::from_code(rest).ok_or_else(|| format!("invalid mode: '{rest}'"))?,
        ),
        "lunch" => FormInput::Lunch(number(args.next(), "lunch count")?),
        "dinner" => FormInput::Dinner(number(args.next(), "dinner count")?),
        "total" => FormInput::Total(number(args.next(), "total meals")?),
        "price" => FormInput::Price(price(args.next())?),
        "save" => FormInput::Act(Action::Save),
        "reset" => FormInput::Act(Action::Reset),
        "show" => FormInput::Act(Action::Refresh),
        "edit" => FormInput::Act(Action::Update {
            id: number(args.next(), "record id")?,
            lunch: Some(number(args.next(), "lunch count")?),
            dinner: Some(number(args.next(), "dinner count")?),
            price: Some(price(args.next())?),
        }),
        "del" => FormInput::Act(Action::Delete {
            id: number(args.next(), "record id")?,
        }),
        "feedback" => {
            let rating: u8 = number(args.next(), "rating")?;
            if !(1..=5).contains(&rating) {
                return Err(format!("rating must be between 1 and 5, got {rating}"));
            }
            let message = rest
                .split_once(char::is_whitespace)
                .map(|(_, m)| m.to_string())
                .unwrap_or_default();
            FormInput::Act(Action::SubmitFeedback { message, rating })
        }
        "login" => FormInput::Act(Action::Login {
            password: rest.to_string(),
        }),
        "logout" => FormInput::Act(Action::Logout),
        "inbox" => FormInput::Inbox,
        "drop" => FormInput::Act(Action::DeleteFeedback {
            id: number(args.next(), "feedback id")?,
        }),
        "help" | "?" => FormInput::Help,
        "quit" | "exit" | "q" => FormInput::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };

    Ok(Some(input))
}

/// Drive a session from `input` until EOF or `quit`.
pub fn run_form<R: BufRead>(
    input: R,
    pool: &mut DbPool,
    session: &mut Session,
    secrets: &dyn SecretProvider,
    style: &Style,
) -> AppResult<()> {
    print_prompt()?;

    for line in input.lines() {
        let line = line?;

        match parse_line(&line) {
            Ok(None) => {}
            Err(msg) => error(msg),
            Ok(Some(FormInput::Quit)) => break,
            Ok(Some(FormInput::Help)) => println!("{HELP}"),
            Ok(Some(FormInput::Inbox)) => {
                let mut view = handle_action(pool, session, Action::Refresh, secrets)?;
                if let Err(e) = session.admin.require() {
                    view.notices.push(Notice::Error(e.to_string()));
                }
                print_view(&view, style);
            }
            Ok(Some(FormInput::Act(action))) => {
                let view = handle_action(pool, session, action, secrets)?;
                print_view(&view, style);
            }
            Ok(Some(field)) => {
                apply_field(session, field);
                let view = handle_action(pool, session, Action::Refresh, secrets)?;
                print_entry(&view, style);
            }
        }

        print_prompt()?;
    }

    println!();
    info("Bye!");
    Ok(())
}

fn apply_field(session: &mut Session, field: FormInput) {
    let form = &mut session.form;
    match field {
        FormInput::Name(n) => form.person_name = n,
        FormInput::Date(d) => form.meal_date = d,
        FormInput::Mode(m) => form.mode = m,
        FormInput::Lunch(n) => form.lunch = n,
        FormInput::Dinner(n) => form.dinner = n,
        FormInput::Total(n) => form.manual_total = n,
        FormInput::Price(p) => form.meal_price = p,
        FormInput::Act(_) | FormInput::Inbox | FormInput::Help | FormInput::Quit => {}
    }
}

fn print_prompt() -> AppResult<()> {
    print!("mealtally> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn handle(cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    let (mut pool, mut session) = open_session(cfg)?;

    info("Interactive form. Type 'help' for commands, 'quit' to leave.");

    let stdin = io::stdin();
    run_form(stdin.lock(), &mut pool, &mut session, secrets, &style(cfg))
}
