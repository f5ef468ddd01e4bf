//! Per-session form state and the action handlers that drive it.
//!
//! Every user interaction is one `Action`. `handle` applies it to the store,
//! re-reads the persisted state and returns a fresh `View`; nothing is kept
//! between calls except what lives in the `Session`.

use crate::config::SecretProvider;
use crate::core::admin::AdminGate;
use crate::core::calculator::{self, Totals};
use crate::core::summary::{self, Aggregate, MonthlyRow};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::feedback::FeedbackRecord;
use crate::models::meal::{MealRecord, NewMeal};
use crate::models::meal_mode::MealMode;
use chrono::{NaiveDate, SecondsFormat, Utc};

/// Values currently typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub person_name: String,
    pub meal_date: NaiveDate,
    pub mode: MealMode,
    pub lunch: u32,
    pub dinner: u32,
    pub manual_total: u32,
    pub meal_price: f64,
}

impl FormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            person_name: String::new(),
            meal_date: today,
            mode: MealMode::Auto,
            lunch: 0,
            dinner: 0,
            manual_total: 0,
            meal_price: 0.0,
        }
    }

    pub fn totals(&self) -> Totals {
        calculator::calculate(
            self.mode,
            self.lunch,
            self.dinner,
            self.manual_total,
            self.meal_price,
        )
    }

    /// Trimmed name, `None` when blank.
    pub fn person(&self) -> Option<&str> {
        let name = self.person_name.trim();
        if name.is_empty() { None } else { Some(name) }
    }

    fn to_new_meal(&self, person: &str) -> NewMeal {
        NewMeal {
            person_name: person.to_string(),
            meal_date: self.meal_date,
            mode: self.mode,
            lunch: self.lunch,
            dinner: self.dinner,
            manual_total: self.manual_total,
            meal_price: self.meal_price,
        }
    }
}

/// Everything that belongs to one user session.
#[derive(Debug, Clone)]
pub struct Session {
    pub form: FormState,
    pub admin: AdminGate,
    today: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: FormState::new(today),
            admin: AdminGate::new(),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replace the form with defaults. The admin flag survives.
    pub fn reset(&mut self) {
        self.form = FormState::new(self.today);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-render only
    Refresh,
    Save,
    Reset,
    /// Missing values fall back to the row's current ones (NULL → 0).
    Update {
        id: i64,
        lunch: Option<u32>,
        dinner: Option<u32>,
        price: Option<f64>,
    },
    Delete {
        id: i64,
    },
    Login {
        password: String,
    },
    Logout,
    SubmitFeedback {
        message: String,
        rating: u8,
    },
    DeleteFeedback {
        id: i64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::Warning(_))
    }
}

/// Summary of the entry currently in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySummary {
    pub meal_date: NaiveDate,
    pub mode: MealMode,
    pub totals: Totals,
}

/// Render model returned by every handler.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub notices: Vec<Notice>,
    pub person: Option<String>,
    pub entry: EntrySummary,
    pub records: Vec<MealRecord>,
    pub totals: Aggregate,
    pub monthly: Vec<MonthlyRow>,
    pub chart: Vec<(NaiveDate, u64)>,
    /// Present only while the admin gate is open.
    pub inbox: Option<Vec<FeedbackRecord>>,
}

impl View {
    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.notices.iter().any(Notice::is_warning)
    }
}

const NAME_REQUIRED: &str = "Please enter your name first.";

/// Apply one action and rebuild the view from the persisted state.
pub fn handle(
    pool: &mut DbPool,
    session: &mut Session,
    action: Action,
    secrets: &dyn SecretProvider,
) -> AppResult<View> {
    let mut notices = Vec::new();

    match action {
        Action::Refresh => {}

        Action::Save => match session.form.person() {
            None => notices.push(Notice::Warning(NAME_REQUIRED.into())),
            Some(person) => {
                let meal = session.form.to_new_meal(person);
                let id = queries::insert_meal(&pool.conn, &meal)?;
                ttlog(
                    &pool.conn,
                    "add",
                    &format!("{} {}", person, meal.meal_date),
                    &format!("Saved record #{} ({} meals)", id, meal.totals().total_meals),
                )?;
                notices.push(Notice::Success("Record saved successfully!".into()));
            }
        },

        Action::Reset => session.reset(),

        Action::Update {
            id,
            lunch,
            dinner,
            price,
        } => match queries::get_meal(&pool.conn, id)? {
            None => notices.push(Notice::Info(format!("No record #{}: nothing to update.", id))),
            Some(current) => {
                let lunch = lunch.or(current.lunch).unwrap_or(0);
                let dinner = dinner.or(current.dinner).unwrap_or(0);
                let price = price.unwrap_or(current.meal_price);

                queries::update_meal(&pool.conn, id, lunch, dinner, price)?;
                ttlog(
                    &pool.conn,
                    "edit",
                    &format!("#{}", id),
                    &format!("lunch={} dinner={} price={}", lunch, dinner, price),
                )?;
                notices.push(Notice::Success(format!("Record #{} updated!", id)));
            }
        },

        Action::Delete { id } => {
            if queries::delete_meal(&pool.conn, id)? > 0 {
                ttlog(&pool.conn, "del", &format!("#{}", id), "Deleted meal record")?;
                notices.push(Notice::Warning(format!("Record #{} deleted!", id)));
            } else {
                notices.push(Notice::Info(format!("No record #{}: nothing to delete.", id)));
            }
        }

        Action::Login { password } => match session.admin.login(&password, secrets) {
            Ok(()) => notices.push(Notice::Success("Admin access granted.".into())),
            Err(e @ (AppError::AuthFailed | AppError::SecretMissing)) => {
                notices.push(Notice::Error(e.to_string()))
            }
            Err(e) => return Err(e),
        },

        Action::Logout => {
            session.admin.logout();
            notices.push(Notice::Info("Logged out.".into()));
        }

        Action::SubmitFeedback { message, rating } => {
            let message = message.trim();
            if message.is_empty() {
                notices.push(Notice::Warning("Feedback message cannot be empty.".into()));
            } else {
                let name = session.form.person_name.trim();
                let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                let id = queries::insert_feedback(&pool.conn, name, message, rating, &now)?;
                ttlog(
                    &pool.conn,
                    "feedback",
                    &format!("#{}", id),
                    &format!("Rating {} from '{}'", rating, name),
                )?;
                notices.push(Notice::Success("Thank you for your feedback!".into()));
            }
        }

        Action::DeleteFeedback { id } => {
            if let Err(e) = session.admin.require() {
                notices.push(Notice::Error(e.to_string()));
            } else if queries::delete_feedback(&pool.conn, id)? > 0 {
                ttlog(&pool.conn, "del", &format!("feedback #{}", id), "Deleted feedback")?;
                notices.push(Notice::Warning(format!("Feedback #{} deleted!", id)));
            } else {
                notices.push(Notice::Info(format!("No feedback #{}: nothing to delete.", id)));
            }
        }
    }

    render(pool, session, notices)
}

/// Build the view from the current persisted state and session.
pub fn render(pool: &mut DbPool, session: &Session, notices: Vec<Notice>) -> AppResult<View> {
    let person = session.form.person().map(str::to_string);

    let records = match &person {
        Some(p) => queries::list_meals_by_person(&pool.conn, p)?,
        None => Vec::new(),
    };

    let inbox = if session.admin.is_logged_in() {
        Some(queries::list_feedback(&pool.conn)?)
    } else {
        None
    };

    Ok(View {
        notices,
        entry: EntrySummary {
            meal_date: session.form.meal_date,
            mode: session.form.mode,
            totals: session.form.totals(),
        },
        totals: summary::totals(&records),
        monthly: summary::monthly(&records),
        chart: summary::daily_meals(&records),
        records,
        person,
        inbox,
    })
}
