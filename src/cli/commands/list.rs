use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::shift::{ShiftLimits, format_hours, format_minutes, validate_shift_with};
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::export::{DayStatus, ExportRow, ExportScope};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_balance, colorize_optional};
use crate::utils::date::month_or_current;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, all } = cmd {
        let store = open_store(cfg)?;
        let profile = store.profile();

        let scope = if *all {
            ExportScope::all(store.records(), profile)
        } else {
            let (year, m) = month_or_current(month.as_deref())?;
            ExportScope::month(store.records(), year, m, profile)
        };

        if scope.records.is_empty() {
            info(format!("No records for {}.", scope.title));
            return Ok(());
        }

        header(format!("{} - {}", scope.title, profile.display_name));
        print!("{}", render_rows(&scope, &cfg.shift_limits()));

        let totals = scope.totals();
        println!();
        println!(
            "Days: {}   Worked: {}   Balance: {}",
            scope.records.len(),
            format_hours(totals.worked_minutes),
            colorize_balance(totals.net_balance(), &format_minutes(totals.net_balance()))
        );
    }

    Ok(())
}

fn render_rows(scope: &ExportScope, limits: &ShiftLimits) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("DATE", 10),
        Column::new("IN", 5),
        Column::new("OUT", 5),
        Column::new("WORKED", 7),
        Column::new("BALANCE", 8),
        Column::new("STATUS", 12),
        Column::new("NOTES", 24),
    ]);

    for record in &scope.records {
        let row = ExportRow::from_record(record, scope.profile);

        let balance = match row.status {
            DayStatus::NoRecord => colorize_optional(""),
            _ => colorize_balance(row.balance_minutes, &format_minutes(row.balance_minutes)),
        };

        let notes = validate_shift_with(record.entry, record.exit, limits)
            .reason()
            .unwrap_or_default();

        table.add_row(vec![
            record.short_id().to_string(),
            record.date_str(),
            colorize_optional(&row.entry),
            colorize_optional(&row.exit),
            format_hours(row.worked_minutes),
            balance,
            row.status.label().to_string(),
            notes,
        ]);
    }

    table.render()
}
