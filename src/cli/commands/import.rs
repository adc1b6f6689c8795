use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::import::ImportLogic;
use crate::ui::messages::{confirm, info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let path = expand_tilde(file);

        // parse before touching the store: a bad file leaves it untouched
        let records = ImportLogic::dedupe_dates(ImportLogic::read_file(&path)?);

        let mut store = open_store(cfg)?;

        if !*yes {
            let prompt = format!(
                "Replace the {} stored records with {} records from {}?",
                store.records().len(),
                records.len(),
                path.display()
            );
            if !confirm(&prompt) {
                info("Import cancelled.");
                return Ok(());
            }
        }

        let count = ImportLogic::apply(&mut store, records)?;

        audit(
            &store,
            "import",
            &path.display().to_string(),
            &format!("Imported {} records", count),
        );
        success(format!("Imported {} records from {}", count, path.display()));
    }

    Ok(())
}
