use clap::Subcommand;
use zenlogger_core::storage::settings::{DEFAULT_VIEW, GOAL_SECONDS, SELECTED_SOUND, THEME};
use zenlogger_core::storage::SOUND_OPTIONS;
use zenlogger_core::{Config, Settings, SettingsRepository, SqliteStore};

use super::{open_store, CliResult};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print one setting
    Get {
        /// goalSeconds, defaultView, selectedSound, theme, or any stored name
        name: String,
    },
    /// Change one setting
    Set {
        name: String,
        /// Plain value for known settings, JSON for anything else
        value: String,
    },
    /// Print every known setting with defaults applied
    List,
    /// Available alert sounds
    Sounds,
}

pub async fn run(action: SettingsAction, config: &Config) -> CliResult {
    let repo = SettingsRepository::new(open_store(config)?);

    match action {
        SettingsAction::Get { name } => {
            let settings = Settings::load(&repo).await?;
            match name.as_str() {
                GOAL_SECONDS => println!("{}", settings.goal_seconds),
                DEFAULT_VIEW => println!("{}", settings.default_view),
                SELECTED_SOUND => println!("{}", settings.selected_sound),
                THEME => println!("{}", settings.theme),
                other => match repo.get_raw(other).await? {
                    Some(raw) => println!("{raw}"),
                    None => return Err(format!("setting '{other}' is not set").into()),
                },
            }
        }
        SettingsAction::Set { name, value } => {
            set(&repo, &name, &value).await?;
            println!("ok");
        }
        SettingsAction::List => {
            let settings = Settings::load(&repo).await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Sounds => {
            for (label, id) in SOUND_OPTIONS {
                println!("{label:<20} {id}");
            }
        }
    }
    Ok(())
}

async fn set(repo: &SettingsRepository<SqliteStore>, name: &str, value: &str) -> CliResult {
    match name {
        GOAL_SECONDS => {
            let secs: u64 = value
                .parse()
                .map_err(|e| format!("goalSeconds must be a whole number of seconds: {e}"))?;
            if secs == 0 {
                return Err("goalSeconds must be positive".into());
            }
            repo.set_goal_seconds(secs).await?;
        }
        DEFAULT_VIEW => repo.set_default_view(value.parse()?).await?,
        THEME => repo.set_theme(value.parse()?).await?,
        SELECTED_SOUND => {
            let id = SOUND_OPTIONS
                .iter()
                .find(|(label, id)| *id == value || label.eq_ignore_ascii_case(value))
                .map(|(_, id)| *id)
                .ok_or_else(|| format!("unknown sound '{value}', see `zenlogger settings sounds`"))?;
            repo.set_selected_sound(id).await?;
        }
        other => repo.set_raw(other, value).await?,
    }
    Ok(())
}
