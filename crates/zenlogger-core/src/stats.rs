//! Aggregates over the session log for the list and calendar views.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::storage::Session;

/// Sessions and time logged on one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub sessions: u64,
    pub total_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_sessions: u64,
    pub total_secs: u64,
    pub today_sessions: u64,
    pub today_secs: u64,
    /// Distinct days with at least one session.
    pub active_days: u64,
}

/// Per-day totals keyed by the local date (in `tz`) each session was created.
pub fn daily_totals<Tz: TimeZone>(sessions: &[Session], tz: &Tz) -> BTreeMap<NaiveDate, DayStats> {
    let mut days: BTreeMap<NaiveDate, DayStats> = BTreeMap::new();
    for session in sessions {
        let day = session.created_at.with_timezone(tz).date_naive();
        let entry = days.entry(day).or_default();
        entry.sessions += 1;
        entry.total_secs += session.duration_secs;
    }
    days
}

impl Stats {
    pub fn compute<Tz: TimeZone>(sessions: &[Session], today: NaiveDate, tz: &Tz) -> Self {
        let days = daily_totals(sessions, tz);
        let mut stats = Stats {
            active_days: days.len() as u64,
            ..Stats::default()
        };

        for (day, totals) in &days {
            stats.total_sessions += totals.sessions;
            stats.total_secs += totals.total_secs;
            if *day == today {
                stats.today_sessions = totals.sessions;
                stats.today_secs = totals.total_secs;
            }
        }
        stats
    }
}
