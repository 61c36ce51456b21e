use chrono::Local;
use clap::Subcommand;
use zenlogger_core::timer::format_duration;
use zenlogger_core::{daily_totals, Config, SessionRepository, Stats};

use super::{open_store, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's totals
    Today,
    /// All-time totals
    All,
    /// Per-day totals, oldest first
    Days {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(action: StatsAction, config: &Config) -> CliResult {
    let store = open_store(config)?;
    let sessions = SessionRepository::new(store).list_or_empty().await?;

    match action {
        StatsAction::Today => {
            let stats = Stats::compute(&sessions, Local::now().date_naive(), &Local);
            println!("{}", serde_json::to_string_pretty(&TodayView::from(&stats))?);
        }
        StatsAction::All => {
            let stats = Stats::compute(&sessions, Local::now().date_naive(), &Local);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Days { json } => {
            let days = daily_totals(&sessions, &Local);
            if json {
                println!("{}", serde_json::to_string_pretty(&days)?);
            } else {
                for (day, totals) in &days {
                    println!(
                        "{day}  {:>3} session(s)  {}",
                        totals.sessions,
                        format_duration(totals.total_secs)
                    );
                }
            }
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct TodayView {
    sessions: u64,
    total_secs: u64,
}

impl From<&Stats> for TodayView {
    fn from(stats: &Stats) -> Self {
        Self {
            sessions: stats.today_sessions,
            total_secs: stats.today_secs,
        }
    }
}
