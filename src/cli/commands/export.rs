use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_store;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, ExportScope, ExportTarget};
use crate::utils::date::parse_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        dir,
        month,
        no_schedule,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let profile = store.profile();

        let scope = match month {
            Some(m) => {
                let (year, month) =
                    parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?;
                ExportScope::month(store.records(), year, month, profile)
            }
            None => ExportScope::all(store.records(), profile),
        };

        let target = match (file, dir) {
            (Some(f), _) => ExportTarget::File(f.clone()),
            (None, Some(d)) => ExportTarget::Dir(d.clone()),
            (None, None) => ExportTarget::Dir(cfg.export_dir.clone()),
        };

        if let Some(path) = ExportLogic::export(&scope, format, &target, !*no_schedule, *force)? {
            audit(
                &store,
                "export",
                format.as_str(),
                &format!("Exported {} records to {}", scope.records.len(), path.display()),
            );
        }
    }

    Ok(())
}
