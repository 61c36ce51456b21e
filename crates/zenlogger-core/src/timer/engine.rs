//! Timer engine implementation.
//!
//! The engine is a synchronous state machine with no clock of its own. The
//! caller drives it: `tick()` once per elapsed second while running, and
//! `set_active()` on every foreground/background transition of the host.
//!
//! ## State Transitions
//!
//! ```text
//! Idle(remaining = goal) -> Running -> Idle (paused, or completed at zero)
//! Idle <-> Editing
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(300);
//! engine.start();
//! // Once per second:
//! if let Some(Event::SessionCompleted { elapsed_secs, .. }) = engine.tick() {
//!     sessions.add(elapsed_secs as i64).await?;
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::{CompletionReason, Event};

/// Longest goal the engine accepts (366 days). Larger goals are capped.
pub const MAX_GOAL_SECS: u64 = 366 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    /// The goal is being edited; only reachable from `Idle`.
    Editing,
}

/// Countdown toward a goal with an elapsed-time accumulator.
///
/// Completion is latched: a run reports `SessionCompleted` at most once,
/// whether it ends at zero or through `save_early()`.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    goal_secs: u64,
    remaining_secs: u64,
    elapsed_secs: u64,
    state: TimerState,
    completion_fired: bool,
    pending_edit_minutes: Option<String>,
    disabled: bool,
    last_known_active: bool,
    /// Wall-clock time the host went inactive while the countdown was running.
    suspended_at: Option<DateTime<Utc>>,
}

impl TimerEngine {
    /// Create an idle engine with `remaining = goal`.
    pub fn new(goal_secs: u64) -> Self {
        let goal_secs = goal_secs.clamp(1, MAX_GOAL_SECS);
        Self {
            goal_secs,
            remaining_secs: goal_secs,
            elapsed_secs: 0,
            state: TimerState::Idle,
            completion_fired: false,
            pending_edit_minutes: None,
            disabled: false,
            last_known_active: true,
            suspended_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn goal_secs(&self) -> u64 {
        self.goal_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn completion_fired(&self) -> bool {
        self.completion_fired
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_active(&self) -> bool {
        self.last_known_active
    }

    pub fn pending_edit_minutes(&self) -> Option<&str> {
        self.pending_edit_minutes.as_deref()
    }

    /// Mid-session: some time logged, goal not yet reached, nothing reported.
    pub fn can_save_early(&self) -> bool {
        self.elapsed_secs > 0 && self.remaining_secs > 0 && !self.completion_fired
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            goal_secs: self.goal_secs,
            remaining_secs: self.remaining_secs,
            elapsed_secs: self.elapsed_secs,
            completion_fired: self.completion_fired,
            disabled: self.disabled,
            pending_edit_minutes: self.pending_edit_minutes.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Refused while the host is inactive; the background gap is only
    /// measured for a run that spans the whole of it.
    pub fn start(&mut self) -> Option<Event> {
        if self.disabled
            || !self.last_known_active
            || self.state != TimerState::Idle
            || self.remaining_secs == 0
        {
            return None;
        }
        self.state = TimerState::Running;
        self.completion_fired = false;
        tracing::debug!(remaining = self.remaining_secs, "timer started");
        Some(Event::TimerStarted {
            goal_secs: self.goal_secs,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Manual stop. Remaining and elapsed are both kept. Refused while the
    /// host is inactive, like [`start`](Self::start).
    pub fn pause(&mut self) -> Option<Event> {
        if self.disabled || !self.last_known_active || self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Idle;
        tracing::debug!(remaining = self.remaining_secs, elapsed = self.elapsed_secs, "timer paused");
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => self.pause(),
            TimerState::Editing => {
                self.cancel_edit();
                self.start()
            }
            TimerState::Idle => self.start(),
        }
    }

    /// Advance by one second. Call once per elapsed second.
    ///
    /// Returns `Some(Event::SessionCompleted)` on the first zero-crossing of a run.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running || self.disabled || !self.last_known_active {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.elapsed_secs += 1;
        }
        self.check_completion(Utc::now())
    }

    /// Report a foreground/background transition of the host.
    ///
    /// Only edges matter; repeating the current value is a no-op. Going
    /// inactive while running records `at`; coming back credits the
    /// whole seconds in between (capped at what was remaining) in one step
    /// and runs the completion check.
    pub fn set_active(&mut self, active: bool, at: DateTime<Utc>) -> Vec<Event> {
        if active == self.last_known_active {
            return Vec::new();
        }
        self.last_known_active = active;

        let mut events = Vec::new();
        if !active {
            if self.state == TimerState::Running {
                self.suspended_at = Some(at);
                if self.remaining_secs > 0 {
                    events.push(Event::Suspended {
                        remaining_secs: self.remaining_secs,
                        at,
                    });
                }
            }
            return events;
        }

        let Some(since) = self.suspended_at.take() else {
            return events;
        };
        if self.state != TimerState::Running {
            // Stopped while in the background; nothing ran.
            return events;
        }

        let background_secs = (at - since).num_seconds().max(0) as u64;
        let applied = background_secs.min(self.remaining_secs);
        self.remaining_secs -= applied;
        self.elapsed_secs += applied;
        tracing::debug!(background_secs, applied, remaining = self.remaining_secs, "reconciled after resume");

        events.push(Event::Reconciled {
            background_secs,
            remaining_secs: self.remaining_secs,
            elapsed_secs: self.elapsed_secs,
            at,
        });
        events.extend(self.check_completion(at));
        events
    }

    pub fn suspend(&mut self, at: DateTime<Utc>) -> Vec<Event> {
        self.set_active(false, at)
    }

    pub fn resume(&mut self, at: DateTime<Utc>) -> Vec<Event> {
        self.set_active(true, at)
    }

    /// Enter goal editing with the buffer seeded from the remaining minutes.
    pub fn begin_edit(&mut self) -> Option<Event> {
        if self.disabled || self.state != TimerState::Idle {
            return None;
        }
        let pending = (self.remaining_secs / 60).to_string();
        self.state = TimerState::Editing;
        self.pending_edit_minutes = Some(pending.clone());
        Some(Event::EditStarted {
            pending_minutes: pending,
            at: Utc::now(),
        })
    }

    /// Replace the edit buffer. Non-digit characters are dropped.
    pub fn set_edit_input(&mut self, input: &str) -> bool {
        if self.state != TimerState::Editing {
            return false;
        }
        self.pending_edit_minutes = Some(input.chars().filter(char::is_ascii_digit).collect());
        true
    }

    /// Apply the edit buffer as the new goal.
    pub fn commit_edit(&mut self) -> Option<Event> {
        if self.state != TimerState::Editing {
            return None;
        }
        let input = self.pending_edit_minutes.take().unwrap_or_default();
        self.edit_goal(parse_minutes(&input))
    }

    pub fn cancel_edit(&mut self) -> Option<Event> {
        if self.state != TimerState::Editing {
            return None;
        }
        self.state = TimerState::Idle;
        self.pending_edit_minutes = None;
        Some(Event::EditCancelled { at: Utc::now() })
    }

    /// Set a new goal of `minutes` (clamped to at least 1, capped at
    /// [`MAX_GOAL_SECS`]).
    ///
    /// Resets remaining to the new goal; elapsed is kept.
    pub fn edit_goal(&mut self, minutes: i64) -> Option<Event> {
        if self.disabled || self.state == TimerState::Running {
            return None;
        }
        let minutes = match clamp_minutes(minutes) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(error = %e, "goal clamped to 1 minute");
                1
            }
        };
        self.goal_secs = minutes.saturating_mul(60).min(MAX_GOAL_SECS);
        self.remaining_secs = self.goal_secs;
        self.state = TimerState::Idle;
        self.pending_edit_minutes = None;
        Some(Event::GoalChanged {
            goal_secs: self.goal_secs,
            at: Utc::now(),
        })
    }

    /// Textual variant of [`edit_goal`](Self::edit_goal); unparsable input counts as 1.
    pub fn edit_goal_input(&mut self, input: &str) -> Option<Event> {
        self.edit_goal(parse_minutes(input))
    }

    /// Discard progress toward the goal. Elapsed is kept.
    pub fn reset_remaining(&mut self) -> Option<Event> {
        if self.disabled || self.state == TimerState::Running {
            return None;
        }
        self.remaining_secs = self.goal_secs;
        Some(Event::RemainingReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Zero the elapsed accumulator and re-arm completion.
    pub fn reset_elapsed(&mut self) -> Option<Event> {
        if self.disabled {
            return None;
        }
        self.elapsed_secs = 0;
        self.completion_fired = false;
        Some(Event::ElapsedReset { at: Utc::now() })
    }

    /// Finish before the goal, reporting the elapsed time so far.
    ///
    /// Shares the completion latch with the zero-crossing, so a run is
    /// reported once no matter which path gets there first.
    pub fn save_early(&mut self) -> Option<Event> {
        if self.disabled || !self.can_save_early() {
            return None;
        }
        self.state = TimerState::Idle;
        self.pending_edit_minutes = None;
        self.completion_fired = true;
        tracing::info!(elapsed = self.elapsed_secs, "session saved early");
        Some(Event::SessionCompleted {
            elapsed_secs: self.elapsed_secs,
            reason: CompletionReason::SavedEarly,
            at: Utc::now(),
        })
    }

    /// Block (or unblock) user commands and ticking, e.g. while a save is in flight.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Start over with a new goal: remaining = goal, elapsed = 0, idle.
    pub fn reset_to_goal(&mut self, goal_secs: u64) {
        self.goal_secs = goal_secs.clamp(1, MAX_GOAL_SECS);
        self.remaining_secs = self.goal_secs;
        self.elapsed_secs = 0;
        self.state = TimerState::Idle;
        self.completion_fired = false;
        self.pending_edit_minutes = None;
        self.suspended_at = None;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn check_completion(&mut self, at: DateTime<Utc>) -> Option<Event> {
        if self.state != TimerState::Running || self.remaining_secs > 0 {
            return None;
        }
        self.state = TimerState::Idle;
        if self.completion_fired {
            return None;
        }
        self.completion_fired = true;
        tracing::info!(elapsed = self.elapsed_secs, "goal reached");
        Some(Event::SessionCompleted {
            elapsed_secs: self.elapsed_secs,
            reason: CompletionReason::GoalReached,
            at,
        })
    }
}

fn clamp_minutes(minutes: i64) -> Result<u64, ValidationError> {
    if minutes < 1 {
        return Err(ValidationError::GoalTooShort {
            given: minutes.to_string(),
        });
    }
    Ok(minutes as u64)
}

fn parse_minutes(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn completions(events: &[Event]) -> Vec<u64> {
        events.iter().filter_map(Event::completed_secs).collect()
    }

    #[test]
    fn start_pause_resume() {
        let mut engine = TimerEngine::new(300);
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), 300);

        assert!(engine.start().is_some());
        assert_eq!(engine.state(), TimerState::Running);
        assert!(engine.start().is_none());

        engine.tick();
        engine.tick();
        assert!(engine.pause().is_some());
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), 298);
        assert_eq!(engine.elapsed_secs(), 2);

        assert!(engine.start().is_some());
        engine.tick();
        assert_eq!(engine.remaining_secs(), 297);
        assert_eq!(engine.elapsed_secs(), 3);
    }

    #[test]
    fn tick_is_noop_unless_running() {
        let mut engine = TimerEngine::new(60);
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 60);
        assert_eq!(engine.elapsed_secs(), 0);
    }

    #[test]
    fn completion_fires_once() {
        let mut engine = TimerEngine::new(3);
        engine.start();
        let mut events = Vec::new();
        for _ in 0..10 {
            events.extend(engine.tick());
        }
        assert_eq!(completions(&events), vec![3]);
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), 0);
        assert!(engine.completion_fired());
        // Zero remaining: cannot restart without a reset.
        assert!(engine.start().is_none());
    }

    #[test]
    fn background_gap_is_clamped_to_remaining() {
        let mut engine = TimerEngine::new(100);
        engine.start();
        let t0 = Utc::now();

        let suspended = engine.set_active(false, t0);
        assert!(matches!(
            suspended.as_slice(),
            [Event::Suspended { remaining_secs: 100, .. }]
        ));
        // No ticks land while suspended.
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 100);

        let events = engine.set_active(true, t0 + Duration::seconds(130));
        assert_eq!(engine.remaining_secs(), 0);
        assert_eq!(engine.elapsed_secs(), 100);
        assert_eq!(completions(&events), vec![100]);
        assert_eq!(engine.state(), TimerState::Idle);

        // The zero state observed again never double-reports.
        assert!(engine.tick().is_none());
        assert!(engine.set_active(false, t0).is_empty());
        assert!(completions(&engine.set_active(true, t0 + Duration::seconds(200))).is_empty());
    }

    #[test]
    fn partial_background_gap_keeps_running() {
        let mut engine = TimerEngine::new(100);
        engine.start();
        engine.tick();
        let t0 = Utc::now();
        engine.suspend(t0);
        let events = engine.resume(t0 + Duration::milliseconds(30_900));
        assert!(completions(&events).is_empty());
        assert_eq!(engine.remaining_secs(), 69);
        assert_eq!(engine.elapsed_secs(), 31);
        assert!(engine.is_running());
        assert!(matches!(
            events.as_slice(),
            [Event::Reconciled { background_secs: 30, .. }]
        ));
    }

    #[test]
    fn repeated_activity_signal_is_not_an_edge() {
        let mut engine = TimerEngine::new(100);
        engine.start();
        let t0 = Utc::now();
        assert!(engine.set_active(true, t0).is_empty());
        engine.set_active(false, t0);
        assert!(engine.set_active(false, t0 + Duration::seconds(5)).is_empty());
        engine.set_active(true, t0 + Duration::seconds(10));
        assert_eq!(engine.elapsed_secs(), 10);
    }

    #[test]
    fn start_and_pause_are_refused_while_inactive() {
        let mut engine = TimerEngine::new(300);
        engine.start();
        let t0 = Utc::now();
        engine.suspend(t0);
        assert!(engine.pause().is_none());
        assert!(engine.toggle().is_none());
        assert!(engine.is_running());

        engine.resume(t0 + Duration::seconds(110));
        assert_eq!(engine.elapsed_secs(), 110);
        assert_eq!(engine.remaining_secs(), 190);

        // Paused before going inactive: nothing to credit, and no restart
        // while away.
        engine.pause().unwrap();
        let t1 = t0 + Duration::seconds(200);
        engine.suspend(t1);
        assert!(engine.start().is_none());
        engine.resume(t1 + Duration::seconds(60));
        assert_eq!(engine.elapsed_secs(), 110);
        assert_eq!(engine.state(), TimerState::Idle);
    }

    #[test]
    fn goal_is_capped() {
        assert_eq!(TimerEngine::new(u64::MAX).goal_secs(), MAX_GOAL_SECS);

        let mut engine = TimerEngine::new(60);
        engine.edit_goal(i64::MAX);
        assert_eq!(engine.goal_secs(), MAX_GOAL_SECS);
        assert_eq!(engine.remaining_secs(), MAX_GOAL_SECS);

        engine.reset_to_goal(u64::MAX);
        assert_eq!(engine.goal_secs(), MAX_GOAL_SECS);
    }

    #[test]
    fn suspend_while_idle_does_not_reconcile() {
        let mut engine = TimerEngine::new(100);
        let t0 = Utc::now();
        assert!(engine.suspend(t0).is_empty());
        assert!(engine.resume(t0 + Duration::seconds(50)).is_empty());
        assert_eq!(engine.remaining_secs(), 100);
        assert_eq!(engine.elapsed_secs(), 0);
    }

    #[test]
    fn clock_going_backwards_applies_nothing() {
        let mut engine = TimerEngine::new(100);
        engine.start();
        let t0 = Utc::now();
        engine.suspend(t0);
        engine.resume(t0 - Duration::seconds(30));
        assert_eq!(engine.remaining_secs(), 100);
        assert_eq!(engine.elapsed_secs(), 0);
    }

    #[test]
    fn edit_goal_clamps_to_one_minute() {
        for input in [0, -5] {
            let mut engine = TimerEngine::new(300);
            let event = engine.edit_goal(input).unwrap();
            assert_eq!(engine.goal_secs(), 60);
            assert_eq!(engine.remaining_secs(), 60);
            assert!(matches!(event, Event::GoalChanged { goal_secs: 60, .. }));
        }
        let mut engine = TimerEngine::new(300);
        engine.edit_goal_input("abc");
        assert_eq!(engine.goal_secs(), 60);
    }

    #[test]
    fn edit_goal_keeps_elapsed_and_is_blocked_while_running() {
        let mut engine = TimerEngine::new(300);
        engine.start();
        engine.tick();
        assert!(engine.edit_goal(10).is_none());
        engine.pause();
        engine.edit_goal(10).unwrap();
        assert_eq!(engine.goal_secs(), 600);
        assert_eq!(engine.remaining_secs(), 600);
        assert_eq!(engine.elapsed_secs(), 1);
    }

    #[test]
    fn edit_flow_filters_and_commits() {
        let mut engine = TimerEngine::new(300);
        engine.begin_edit().unwrap();
        assert_eq!(engine.state(), TimerState::Editing);
        assert_eq!(engine.pending_edit_minutes(), Some("5"));
        assert!(engine.start().is_none());

        assert!(engine.set_edit_input("1e2-"));
        assert_eq!(engine.pending_edit_minutes(), Some("12"));
        engine.commit_edit().unwrap();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.goal_secs(), 720);

        engine.begin_edit();
        engine.set_edit_input("");
        engine.commit_edit();
        assert_eq!(engine.goal_secs(), 60);

        engine.begin_edit();
        engine.cancel_edit().unwrap();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.goal_secs(), 60);
    }

    #[test]
    fn begin_edit_only_from_idle() {
        let mut engine = TimerEngine::new(300);
        engine.start();
        assert!(engine.begin_edit().is_none());
    }

    #[test]
    fn reset_remaining_keeps_elapsed() {
        let mut engine = TimerEngine::new(5);
        engine.start();
        engine.tick();
        engine.tick();
        assert!(engine.reset_remaining().is_none());
        engine.pause();
        engine.reset_remaining().unwrap();
        assert_eq!(engine.remaining_secs(), 5);
        assert_eq!(engine.elapsed_secs(), 2);
    }

    #[test]
    fn reset_elapsed_rearms_completion() {
        let mut engine = TimerEngine::new(1);
        engine.start();
        assert!(engine.tick().is_some());
        engine.reset_elapsed().unwrap();
        assert_eq!(engine.elapsed_secs(), 0);
        assert!(!engine.completion_fired());
        assert_eq!(engine.remaining_secs(), 0);
    }

    #[test]
    fn save_early_reports_elapsed_and_idles() {
        let mut engine = TimerEngine::new(100);
        engine.start();
        for _ in 0..42 {
            engine.tick();
        }
        assert_eq!(engine.remaining_secs(), 58);

        let event = engine.save_early().unwrap();
        assert_eq!(event.completed_secs(), Some(42));
        assert!(matches!(
            event,
            Event::SessionCompleted { reason: CompletionReason::SavedEarly, .. }
        ));
        assert_eq!(engine.state(), TimerState::Idle);
        assert!(engine.save_early().is_none());
    }

    #[test]
    fn save_early_requires_progress_and_time_left() {
        let mut engine = TimerEngine::new(2);
        assert!(engine.save_early().is_none());
        engine.start();
        engine.tick();
        engine.tick();
        assert!(engine.save_early().is_none());
    }

    #[test]
    fn save_early_and_zero_crossing_share_the_latch() {
        let mut engine = TimerEngine::new(10);
        engine.start();
        engine.tick();
        let t0 = Utc::now();
        engine.suspend(t0);
        engine.save_early().unwrap();
        // Reconciliation after the early save must not log again.
        let events = engine.resume(t0 + Duration::seconds(60));
        assert!(completions(&events).is_empty());
    }

    #[test]
    fn disabled_blocks_commands_and_ticks() {
        let mut engine = TimerEngine::new(60);
        engine.set_disabled(true);
        assert!(engine.start().is_none());
        assert!(engine.begin_edit().is_none());
        assert!(engine.edit_goal(3).is_none());

        engine.set_disabled(false);
        engine.start();
        engine.set_disabled(true);
        assert!(engine.tick().is_none());
        assert_eq!(engine.elapsed_secs(), 0);
        assert!(engine.pause().is_none());
    }

    #[test]
    fn reset_to_goal_starts_fresh() {
        let mut engine = TimerEngine::new(60);
        engine.start();
        engine.tick();
        engine.reset_to_goal(120);
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), 120);
        assert_eq!(engine.elapsed_secs(), 0);
        assert!(!engine.completion_fired());
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = TimerEngine::new(300);
        match engine.snapshot() {
            Event::StateSnapshot {
                state,
                remaining_secs,
                elapsed_secs,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(remaining_secs, 300);
                assert_eq!(elapsed_secs, 0);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    proptest! {
        #[test]
        fn one_completion_per_run(goal in 1u64..200, extra in 0usize..50, gaps in proptest::collection::vec(0i64..90, 0..4)) {
            let mut engine = TimerEngine::new(goal);
            engine.start();
            let mut events = Vec::new();
            let mut now = Utc::now();
            for gap in gaps {
                events.extend(engine.tick());
                events.extend(engine.suspend(now));
                now += Duration::seconds(gap);
                events.extend(engine.resume(now));
            }
            for _ in 0..(goal as usize + extra) {
                events.extend(engine.tick());
            }
            prop_assert_eq!(completions(&events), vec![goal]);
            prop_assert_eq!(engine.elapsed_secs(), goal);
            prop_assert_eq!(engine.remaining_secs(), 0);
        }
    }
}
