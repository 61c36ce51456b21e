//! Async driver that owns one engine and its platform resources.
//!
//! A spawned runtime holds the tick interval, the sound player and the
//! notifier for a single timer instance. Ticks, commands and activity edges
//! are handled in one `select!` loop, so no two transitions ever overlap.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use super::engine::TimerEngine;
use crate::events::{CompletionReason, Event};
use crate::platform::{Notifier, SoundPlayer, SystemClock, WallClock};
use crate::storage::settings::DEFAULT_SOUND;
use crate::storage::{AlertsConfig, Config};

/// The one notification id a runtime ever schedules.
pub const ALERT_NOTIFICATION_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum TimerCommand {
    Start,
    Pause,
    Toggle,
    BeginEdit,
    EditInput(String),
    CommitEdit,
    CancelEdit,
    EditGoal(i64),
    ResetRemaining,
    ResetElapsed,
    SaveEarly,
    SetDisabled(bool),
    /// Fresh timer for `goal_secs`, as after a logged session.
    ResetToGoal(u64),
    /// Foreground/background signal from the host.
    SetActive { active: bool, at: DateTime<Utc> },
    SetSound(String),
    Snapshot,
    Shutdown,
}

pub struct TimerRuntime {
    engine: TimerEngine,
    sound: Box<dyn SoundPlayer>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn WallClock>,
    sound_id: String,
    alerts: AlertsConfig,
    tick_period: Duration,
    stall_threshold: Option<Duration>,
    alert_scheduled: bool,
}

/// Tick interval plus the wall-clock time of the last tick it delivered.
struct Cadence {
    ticker: Interval,
    last_wall: DateTime<Utc>,
}

impl Cadence {
    fn new(period: Duration, now: DateTime<Utc>) -> Self {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            ticker,
            last_wall: now,
        }
    }

    /// Next tick one full period from now.
    fn restart(&mut self, now: DateTime<Utc>) {
        self.ticker.reset();
        self.last_wall = now;
    }
}

impl TimerRuntime {
    pub fn new(
        engine: TimerEngine,
        sound: Box<dyn SoundPlayer>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            engine,
            sound,
            notifier,
            clock: Box::new(SystemClock),
            sound_id: DEFAULT_SOUND.to_string(),
            alerts: AlertsConfig::default(),
            tick_period: Duration::from_secs(1),
            stall_threshold: Some(Duration::from_secs(3)),
            alert_scheduled: false,
        }
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.alerts = config.alerts.clone();
        self.tick_period = config.tick_interval();
        self.stall_threshold = config.stall_threshold();
        self
    }

    pub fn with_sound_id(mut self, sound_id: impl Into<String>) -> Self {
        self.sound_id = sound_id.into();
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn WallClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_stall_threshold(mut self, threshold: Option<Duration>) -> Self {
        self.stall_threshold = threshold;
        self
    }

    /// Spawn onto the current tokio runtime.
    pub fn spawn(self) -> (TimerHandle, mpsc::UnboundedReceiver<Event>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(cmd_rx, event_tx));
        (
            TimerHandle {
                commands: cmd_tx,
                task,
            },
            event_rx,
        )
    }

    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<TimerCommand>,
        events: mpsc::UnboundedSender<Event>,
    ) -> TimerEngine {
        let mut cadence = Cadence::new(self.tick_period, self.clock.now());

        loop {
            tokio::select! {
                _ = cadence.ticker.tick() => self.on_tick(&mut cadence, &events),
                cmd = commands.recv() => match cmd {
                    None | Some(TimerCommand::Shutdown) => break,
                    Some(cmd) => self.on_command(cmd, &mut cadence, &events),
                },
            }
        }

        if self.alert_scheduled {
            self.cancel_alert();
        }
        tracing::debug!("timer runtime stopped");
        self.engine
    }

    fn on_tick(&mut self, cadence: &mut Cadence, events: &mpsc::UnboundedSender<Event>) {
        let now = self.clock.now();
        let was_running = self.engine.is_running();

        if was_running {
            if let Some(threshold) = self.stall_threshold {
                let gap = (now - cadence.last_wall).to_std().unwrap_or_default();
                if gap > threshold {
                    // The process was frozen; treat the gap as a background period.
                    tracing::debug!(gap_secs = gap.as_secs(), "tick stalled, reconciling");
                    let suspended_at = cadence.last_wall;
                    self.apply_activity(false, suspended_at, false, cadence, events);
                    self.apply_activity(true, now, false, cadence, events);
                    return;
                }
            }
        }
        cadence.last_wall = now;

        if let Some(event) = self.engine.tick() {
            self.publish(event, events);
        }
        if was_running {
            self.publish(self.engine.snapshot(), events);
        }
    }

    fn on_command(
        &mut self,
        cmd: TimerCommand,
        cadence: &mut Cadence,
        events: &mpsc::UnboundedSender<Event>,
    ) {
        let was_running = self.engine.is_running();
        let event = match cmd {
            TimerCommand::Start => self.engine.start(),
            TimerCommand::Pause => self.engine.pause(),
            TimerCommand::Toggle => self.engine.toggle(),
            TimerCommand::BeginEdit => self.engine.begin_edit(),
            TimerCommand::EditInput(input) => {
                self.engine.set_edit_input(&input);
                None
            }
            TimerCommand::CommitEdit => self.engine.commit_edit(),
            TimerCommand::CancelEdit => self.engine.cancel_edit(),
            TimerCommand::EditGoal(minutes) => self.engine.edit_goal(minutes),
            TimerCommand::ResetRemaining => self.engine.reset_remaining(),
            TimerCommand::ResetElapsed => self.engine.reset_elapsed(),
            TimerCommand::SaveEarly => self.engine.save_early(),
            TimerCommand::SetDisabled(disabled) => {
                self.engine.set_disabled(disabled);
                None
            }
            TimerCommand::ResetToGoal(goal_secs) => {
                self.engine.reset_to_goal(goal_secs);
                if self.alert_scheduled {
                    self.cancel_alert();
                }
                Some(self.engine.snapshot())
            }
            TimerCommand::SetActive { active, at } => {
                self.apply_activity(active, at, true, cadence, events);
                None
            }
            TimerCommand::SetSound(sound_id) => {
                self.sound_id = sound_id;
                None
            }
            TimerCommand::Snapshot => Some(self.engine.snapshot()),
            TimerCommand::Shutdown => None,
        };

        if !was_running && self.engine.is_running() {
            cadence.restart(self.clock.now());
        }
        if let Some(event) = event {
            self.publish(event, events);
        }
    }

    fn apply_activity(
        &mut self,
        active: bool,
        at: DateTime<Utc>,
        notify: bool,
        cadence: &mut Cadence,
        events: &mpsc::UnboundedSender<Event>,
    ) {
        let transitions = self.engine.set_active(active, at);

        if active {
            if self.alert_scheduled {
                self.cancel_alert();
            }
            // Reconciliation stands in for any tick due right now.
            cadence.restart(self.clock.now());
        }

        for event in transitions {
            if let Event::Suspended { remaining_secs, at } = &event {
                if notify && self.alerts.notifications_enabled {
                    match alert_time(*at, *remaining_secs) {
                        Some(fire_at) => self.schedule_alert(fire_at),
                        None => tracing::warn!(
                            remaining_secs = *remaining_secs,
                            "alert time out of range, not scheduling"
                        ),
                    }
                }
            }
            self.publish(event, events);
        }
    }

    fn schedule_alert(&mut self, fire_at: DateTime<Utc>) {
        match self.notifier.schedule(
            ALERT_NOTIFICATION_ID,
            fire_at,
            &self.alerts.title,
            &self.alerts.body,
        ) {
            Ok(()) => self.alert_scheduled = true,
            Err(e) => tracing::warn!(error = %e, "failed to schedule background alert"),
        }
    }

    fn cancel_alert(&mut self) {
        if let Err(e) = self.notifier.cancel(ALERT_NOTIFICATION_ID) {
            tracing::warn!(error = %e, "failed to cancel background alert");
        }
        self.alert_scheduled = false;
    }

    fn publish(&mut self, event: Event, events: &mpsc::UnboundedSender<Event>) {
        if let Event::SessionCompleted {
            reason: CompletionReason::GoalReached,
            ..
        } = &event
        {
            if let Err(e) = self.sound.play(&self.sound_id) {
                tracing::warn!(error = %e, "alert sound failed");
            }
        }
        // A dropped receiver only means nobody is listening any more.
        let _ = events.send(event);
    }
}

/// `at + remaining_secs`, or `None` if that is not a representable time.
fn alert_time(at: DateTime<Utc>, remaining_secs: u64) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(remaining_secs).ok()?;
    at.checked_add_signed(TimeDelta::try_seconds(secs)?)
}

/// Control side of a spawned [`TimerRuntime`].
pub struct TimerHandle {
    commands: mpsc::UnboundedSender<TimerCommand>,
    task: JoinHandle<TimerEngine>,
}

impl TimerHandle {
    /// Queue a command. Returns `false` once the runtime has stopped.
    pub fn send(&self, cmd: TimerCommand) -> bool {
        self.commands.send(cmd).is_ok()
    }

    /// Stop the runtime, release its resources and hand back the engine.
    pub async fn shutdown(self) -> Option<TimerEngine> {
        let _ = self.commands.send(TimerCommand::Shutdown);
        match self.task.await {
            Ok(engine) => Some(engine),
            Err(e) => {
                tracing::error!(error = %e, "timer runtime task failed");
                None
            }
        }
    }
}
