use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::schedule::all_profiles;
use crate::core::calculator::shift::format_hours;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::schedule::ScheduleProfile;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

fn describe(profile: &ScheduleProfile) {
    println!("📅 {} [{}]", profile.display_name, profile.id);
    println!("   Daily target : {}", format_hours(profile.daily_target_minutes));
    println!("   Weekly target: {}h", profile.weekly_target_hours);
    println!("   Working days : {}", profile.weekday_labels());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { list, set } = cmd {
        let mut store = open_store(cfg)?;

        if let Some(id) = set {
            let profile = store.select_schedule(id)?;
            audit(&store, "schedule", profile.id, "Schedule selected");
            success(format!("Schedule set to {}", profile.display_name));
            return Ok(());
        }

        if *list {
            let current = store.profile().id;
            let mut table = Table::new(vec![
                Column::new("", 2),
                Column::new("ID", 14),
                Column::new("NAME", 34),
                Column::new("DAILY", 7),
                Column::new("WEEKLY", 7),
                Column::new("DAYS", 30),
            ]);

            for p in all_profiles() {
                let marker = if p.id == current { "*" } else { "" };
                table.add_row(vec![
                    marker.to_string(),
                    p.id.to_string(),
                    p.display_name.to_string(),
                    format_hours(p.daily_target_minutes),
                    format!("{}h", p.weekly_target_hours),
                    p.weekday_labels(),
                ]);
            }

            print!("{}", table.render());
            return Ok(());
        }

        describe(store.profile());
    }

    Ok(())
}
