pub mod add;
pub mod backup;
pub mod chart;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod feedback;
pub mod form;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::render::Style;
use crate::utils::date;

/// Open the configured database and start a session for the configured person.
pub(crate) fn open_session(cfg: &Config) -> AppResult<(DbPool, Session)> {
    let pool = DbPool::new(&cfg.database)?;
    let mut session = Session::new(date::today());
    session.form.person_name = cfg.person();
    Ok((pool, session))
}

pub(crate) fn style(cfg: &Config) -> Style {
    Style {
        currency: cfg.currency.clone(),
        separator: cfg.separator_char.clone(),
    }
}
