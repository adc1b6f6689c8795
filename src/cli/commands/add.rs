use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::shift::{format_hours, worked_minutes};
use crate::db::initialize::open_store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add a worked day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        let d = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        let mut store = open_store(cfg)?;
        let record = AddLogic::apply(&mut store, d, start_parsed, end_parsed, &cfg.shift_limits())?;

        audit(
            &store,
            "add",
            &record.date_str(),
            &format!("Added record {}", record.id),
        );

        success(format!(
            "Added {} [{}] worked {}",
            record.date,
            record.short_id(),
            format_hours(worked_minutes(record.entry, record.exit))
        ));
    }

    Ok(())
}
