use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        // resolve first, so a bad id fails before the prompt
        let target = store.find(id)?.clone();

        if !*yes {
            let prompt = format!(
                "Delete the record of {} [{}]? This action is irreversible.",
                target.date,
                target.short_id()
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut store, &target.id)?;

        audit(
            &store,
            "del",
            &removed.date_str(),
            &format!("Deleted record {}", removed.id),
        );
        success(format!("Record of {} has been deleted.", removed.date));
    }

    Ok(())
}
