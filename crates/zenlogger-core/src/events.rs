use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// Remaining time reached zero.
    GoalReached,
    /// The user finished before the goal.
    SavedEarly,
}

/// Every state change of the timer produces an Event.
/// The caller persists sessions and settings in response to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        goal_secs: u64,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    /// Fires at most once per run; carries the seconds to log.
    SessionCompleted {
        elapsed_secs: u64,
        reason: CompletionReason,
        at: DateTime<Utc>,
    },
    /// The goal was edited; the caller persists `goal_secs`.
    GoalChanged {
        goal_secs: u64,
        at: DateTime<Utc>,
    },
    EditStarted {
        pending_minutes: String,
        at: DateTime<Utc>,
    },
    EditCancelled {
        at: DateTime<Utc>,
    },
    RemainingReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    ElapsedReset {
        at: DateTime<Utc>,
    },
    /// Host went to the background while the countdown was running.
    Suspended {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Host came back; `background_secs` of progress were applied.
    Reconciled {
        background_secs: u64,
        remaining_secs: u64,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        goal_secs: u64,
        remaining_secs: u64,
        elapsed_secs: u64,
        completion_fired: bool,
        disabled: bool,
        pending_edit_minutes: Option<String>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Elapsed seconds to log, if this is a completion.
    pub fn completed_secs(&self) -> Option<u64> {
        match self {
            Event::SessionCompleted { elapsed_secs, .. } => Some(*elapsed_secs),
            _ => None,
        }
    }
}
