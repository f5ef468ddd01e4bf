use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportTarget;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        dir,
        file,
        force,
    } = cmd
    {
        let person = cfg.person();
        if person.trim().is_empty() {
            warning("Please enter your name first (--name or default_person in the config).");
            return Ok(());
        }

        let target = match (file, dir) {
            (Some(f), _) => ExportTarget::File(f.clone()),
            (None, Some(d)) => ExportTarget::Dir(d.clone()),
            (None, None) => ExportTarget::Dir(".".to_string()),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, &person, *format, &target, *force)?;
    }
    Ok(())
}
