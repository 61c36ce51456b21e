use chrono::Local;
use clap::Subcommand;
use zenlogger_core::timer::format_duration;
use zenlogger_core::{Config, SessionRepository};

use super::{open_store, CliResult};

#[derive(Subcommand)]
pub enum SessionsAction {
    /// List logged sessions, newest first
    List {
        /// Print the stored JSON records
        #[arg(long)]
        json: bool,
    },
    /// Log a session by hand
    Add {
        /// Duration in seconds
        seconds: i64,
    },
    /// Delete one session
    Delete {
        /// Session id
        id: String,
    },
    /// Delete every session
    Clear {
        /// Skip the confirmation refusal
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(action: SessionsAction, config: &Config) -> CliResult {
    let repo = SessionRepository::new(open_store(config)?);

    match action {
        SessionsAction::List { json } => {
            let sessions = repo.list_or_empty().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else if sessions.is_empty() {
                println!("no sessions yet");
            } else {
                for s in &sessions {
                    let at = s.created_at.with_timezone(&Local);
                    println!(
                        "{}  {}  {}",
                        s.id,
                        at.format("%Y-%m-%d %H:%M"),
                        format_duration(s.duration_secs)
                    );
                }
            }
        }
        SessionsAction::Add { seconds } => match repo.add(seconds).await? {
            Some(session) => println!("{}", serde_json::to_string_pretty(&session)?),
            None => return Err("duration must be positive".into()),
        },
        SessionsAction::Delete { id } => {
            if repo.delete(&id).await? {
                println!("deleted {id}");
            } else {
                println!("no session with id {id}");
            }
        }
        SessionsAction::Clear { yes } => {
            if !yes {
                return Err("refusing to delete every session without --yes".into());
            }
            repo.clear().await?;
            println!("session log cleared");
        }
    }
    Ok(())
}
