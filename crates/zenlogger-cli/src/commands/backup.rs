use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;
use zenlogger_core::backup::{self, backup_file_name};
use zenlogger_core::Config;

use super::{open_store, CliResult};

const APP_NAME: &str = "zenlogger";

#[derive(Subcommand)]
pub enum BackupAction {
    /// Write every stored key to a JSON backup file
    Export {
        /// Output path ("-" for stdout). Defaults to zenlogger_backup_<date>.json
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Restore a backup, overwriting keys it contains
    Import {
        file: PathBuf,
        /// Confirm overwriting existing data
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(action: BackupAction, config: &Config) -> CliResult {
    let store = open_store(config)?;

    match action {
        BackupAction::Export { output } => {
            let json = backup::export(store.as_ref()).await?.to_json()?;
            let path = output
                .unwrap_or_else(|| PathBuf::from(backup_file_name(APP_NAME, Local::now().date_naive())));
            if path.as_os_str() == "-" {
                println!("{json}");
            } else {
                std::fs::write(&path, json)?;
                println!("backup written to {}", path.display());
            }
        }
        BackupAction::Import { file, yes } => {
            if !yes {
                return Err("import overwrites existing data; re-run with --yes to confirm".into());
            }
            let json = std::fs::read_to_string(&file)?;
            let summary = backup::import_json(store.as_ref(), &json).await?;
            println!(
                "imported {} key(s), {} overwritten",
                summary.written, summary.overwritten
            );
        }
    }
    Ok(())
}
