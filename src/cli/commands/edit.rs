use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::shift::format_clock;
use crate::core::edit::{EditLogic, EditRequest};
use crate::db::initialize::open_store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: new_date,
        start,
        end,
        clear_in,
        clear_out,
    } = cmd
    {
        let date = match new_date {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let entry = if *clear_in {
            Some(None)
        } else {
            parse_optional_time(start.as_ref())?.map(Some)
        };
        let exit = if *clear_out {
            Some(None)
        } else {
            parse_optional_time(end.as_ref())?.map(Some)
        };

        let request = EditRequest { date, entry, exit };
        if request.is_empty() {
            warning("Nothing to edit: pass --date, --in, --out, --clear-in or --clear-out.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        let updated = EditLogic::apply(&mut store, id, request, &cfg.shift_limits())?;

        audit(
            &store,
            "edit",
            &updated.date_str(),
            &format!("Edited record {}", updated.id),
        );

        success(format!(
            "Record {} updated: {} {} - {}",
            updated.short_id(),
            updated.date,
            format_clock(updated.entry),
            format_clock(updated.exit)
        ));
    }

    Ok(())
}
