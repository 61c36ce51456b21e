use std::io::Write;
use std::sync::Arc;

use clap::Subcommand;
use tokio::io::{AsyncBufReadExt, BufReader};
use zenlogger_core::timer::{format_clock, format_duration};
use zenlogger_core::{
    CompletionReason, Config, Event, KeyValueStore, LogNotifier, SessionRepository, Settings,
    SettingsRepository, TimerCommand, TimerEngine, TimerHandle, TimerRuntime,
};

use super::{open_store, CliResult};
use crate::bell::TerminalBell;

const HELP: &str = "\
  <enter>, t   start / pause
  s            save early
  r            reset remaining to the goal
  x            reset elapsed
  g <minutes>  set a new goal
  q            quit";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the timer in the foreground, reading commands from stdin
    Run {
        /// Goal for this run only, in minutes (the stored goal is kept)
        #[arg(long)]
        minutes: Option<i64>,
    },
}

#[derive(Debug, PartialEq)]
enum Input {
    Command(TimerCommand),
    SaveEarly,
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    match word {
        "" | "t" | "toggle" => Input::Command(TimerCommand::Toggle),
        "s" | "save" => Input::SaveEarly,
        "r" | "reset" => Input::Command(TimerCommand::ResetRemaining),
        "x" | "reset-elapsed" => Input::Command(TimerCommand::ResetElapsed),
        "g" | "goal" => Input::Command(TimerCommand::EditGoal(rest.trim().parse().unwrap_or(1))),
        "?" | "h" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SavePrompt {
    Idle,
    /// Waiting for a snapshot to show the elapsed time.
    Requested,
    /// Prompt shown, waiting for y/n.
    Confirming,
}

struct Console {
    handle: TimerHandle,
    sessions: SessionRepository<dyn KeyValueStore>,
    settings: SettingsRepository<dyn KeyValueStore>,
    goal_secs: u64,
    save_early: SavePrompt,
}

pub async fn run(action: TimerAction, config: &Config) -> CliResult {
    match action {
        TimerAction::Run { minutes } => run_interactive(minutes, config).await,
    }
}

/// Goal for this run: `--minutes` (at least 1) when given, else the stored goal.
fn run_goal_secs(minutes: Option<i64>, stored_goal_secs: u64) -> u64 {
    minutes.map_or(stored_goal_secs, |m| (m.max(1) as u64).saturating_mul(60))
}

async fn run_interactive(minutes: Option<i64>, config: &Config) -> CliResult {
    let store: Arc<dyn KeyValueStore> = open_store(config)?;
    let settings = SettingsRepository::new(store.clone());
    let stored = Settings::load(&settings).await.unwrap_or_else(|e| {
        eprintln!("could not read settings, using defaults: {e}");
        Settings::default()
    });
    let goal_secs = run_goal_secs(minutes, stored.goal_seconds);

    let runtime = TimerRuntime::new(
        TimerEngine::new(goal_secs),
        Box::new(TerminalBell),
        Box::new(LogNotifier),
    )
    .with_config(config)
    .with_sound_id(stored.selected_sound);
    let (handle, mut events) = runtime.spawn();

    let mut console = Console::new(handle, store, goal_secs);

    println!("goal {}  (? for help)", format_clock(goal_secs));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                None => break,
                Some(line) => {
                    if !console.on_line(&line) {
                        break;
                    }
                }
            },
            event = events.recv() => match event {
                None => break,
                Some(event) => console.on_event(event).await,
            },
        }
    }

    if let Some(engine) = console.handle.shutdown().await {
        if engine.can_save_early() {
            println!("\nleft without saving {}", format_duration(engine.elapsed_secs()));
        }
    }
    Ok(())
}

impl Console {
    fn new(handle: TimerHandle, store: Arc<dyn KeyValueStore>, goal_secs: u64) -> Self {
        Self {
            handle,
            sessions: SessionRepository::new(store.clone()),
            settings: SettingsRepository::new(store),
            goal_secs,
            save_early: SavePrompt::Idle,
        }
    }

    /// Returns `false` when the user asked to quit.
    fn on_line(&mut self, line: &str) -> bool {
        if self.save_early == SavePrompt::Confirming {
            self.save_early = SavePrompt::Idle;
            if matches!(line.trim(), "y" | "yes") {
                self.handle.send(TimerCommand::SaveEarly);
            } else {
                println!("not saved");
            }
            return true;
        }

        match parse_input(line) {
            Input::Command(cmd) => {
                self.handle.send(cmd);
            }
            Input::SaveEarly => {
                self.save_early = SavePrompt::Requested;
                self.handle.send(TimerCommand::Snapshot);
            }
            Input::Help => println!("{HELP}"),
            Input::Quit => return false,
            Input::Unknown(word) => println!("unknown command '{word}'\n{HELP}"),
        }
        true
    }

    async fn on_event(&mut self, event: Event) {
        match event {
            Event::TimerStarted { remaining_secs, .. } => {
                println!("started, {} to go", format_clock(remaining_secs));
            }
            Event::TimerPaused {
                remaining_secs,
                elapsed_secs,
                ..
            } => println!(
                "\npaused, {} remaining, {} elapsed",
                format_clock(remaining_secs),
                format_clock(elapsed_secs)
            ),
            Event::SessionCompleted {
                elapsed_secs,
                reason,
                ..
            } => {
                if reason == CompletionReason::GoalReached {
                    println!("\ngoal reached");
                }
                self.log_session(elapsed_secs).await;
            }
            Event::GoalChanged { goal_secs, .. } => {
                self.goal_secs = goal_secs;
                println!("goal set to {}", format_clock(goal_secs));
                // A new goal means a fresh timer, once it is saved.
                match self.settings.set_goal_seconds(goal_secs).await {
                    Ok(()) => {
                        self.handle.send(TimerCommand::ResetToGoal(goal_secs));
                    }
                    Err(e) => eprintln!("could not save goal: {e}"),
                }
            }
            Event::RemainingReset { remaining_secs, .. } => {
                println!("remaining reset to {}", format_clock(remaining_secs));
            }
            Event::ElapsedReset { .. } => println!("elapsed reset"),
            Event::Reconciled {
                background_secs, ..
            } => println!("\ncaught up {background_secs}s"),
            Event::StateSnapshot {
                remaining_secs,
                elapsed_secs,
                completion_fired,
                ..
            } => {
                if self.save_early == SavePrompt::Requested {
                    if elapsed_secs > 0 && remaining_secs > 0 && !completion_fired {
                        println!(
                            "\nsave your progress ({}) and end the session? [y/N]",
                            format_duration(elapsed_secs)
                        );
                        self.save_early = SavePrompt::Confirming;
                    } else {
                        println!("\nnothing to save yet");
                        self.save_early = SavePrompt::Idle;
                    }
                } else {
                    print!(
                        "\r{} remaining  {} elapsed ",
                        format_clock(remaining_secs),
                        format_clock(elapsed_secs)
                    );
                    let _ = std::io::stdout().flush();
                }
            }
            Event::EditStarted { .. } | Event::EditCancelled { .. } | Event::Suspended { .. } => {}
        }
    }

    /// Persist a finished run. On success the timer starts over at the goal;
    /// on failure it is left as it was.
    async fn log_session(&mut self, elapsed_secs: u64) {
        self.handle.send(TimerCommand::SetDisabled(true));
        let saved = self.sessions.add(elapsed_secs as i64).await;
        self.handle.send(TimerCommand::SetDisabled(false));

        match saved {
            Ok(Some(session)) => {
                println!("logged {}", format_duration(session.duration_secs));
                self.handle.send(TimerCommand::ResetToGoal(self.goal_secs));
            }
            Ok(None) => {}
            Err(e) => eprintln!("could not save session: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::mpsc::UnboundedReceiver;
    use zenlogger_core::{MemoryStore, SilentPlayer, StoreError, TimerState};

    /// A store whose medium is gone.
    struct UnreachableStore;

    fn unreachable() -> StoreError {
        StoreError::Unavailable("disk unplugged".into())
    }

    #[async_trait]
    impl KeyValueStore for UnreachableStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(unreachable())
        }
        async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(unreachable())
        }
        async fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(unreachable())
        }
        async fn keys(&self) -> Result<BTreeSet<String>, StoreError> {
            Err(unreachable())
        }
    }

    fn console(goal_secs: u64, store: Arc<dyn KeyValueStore>) -> (Console, UnboundedReceiver<Event>) {
        let (handle, events) = TimerRuntime::new(
            TimerEngine::new(goal_secs),
            Box::new(SilentPlayer),
            Box::new(LogNotifier),
        )
        .with_stall_threshold(None)
        .spawn();
        (Console::new(handle, store, goal_secs), events)
    }

    /// Hand runtime events to the console until one matches `stop`.
    async fn pump(
        console: &mut Console,
        events: &mut UnboundedReceiver<Event>,
        stop: impl Fn(&Event) -> bool,
    ) -> Event {
        loop {
            let event = events.recv().await.expect("runtime stopped");
            console.on_event(event.clone()).await;
            if stop(&event) {
                return event;
            }
        }
    }

    fn is_snapshot(event: &Event) -> bool {
        matches!(event, Event::StateSnapshot { .. })
    }

    #[tokio::test(start_paused = true)]
    async fn goal_edit_starts_a_fresh_timer() {
        let store = Arc::new(MemoryStore::new());
        let (mut console, mut events) = console(600, store.clone());

        console.on_line("");
        pump(&mut console, &mut events, |e| {
            matches!(e, Event::StateSnapshot { elapsed_secs: 10, .. })
        })
        .await;
        console.on_line("");
        pump(&mut console, &mut events, |e| matches!(e, Event::TimerPaused { .. })).await;

        console.on_line("g 5");
        pump(&mut console, &mut events, |e| matches!(e, Event::GoalChanged { .. })).await;
        match pump(&mut console, &mut events, is_snapshot).await {
            Event::StateSnapshot {
                state,
                goal_secs,
                remaining_secs,
                elapsed_secs,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(goal_secs, 300);
                assert_eq!(remaining_secs, 300);
                assert_eq!(elapsed_secs, 0);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(SettingsRepository::new(store).goal_seconds().await.unwrap(), 300);
        console.handle.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failed_session_write_leaves_timer_stopped() {
        let (mut console, mut events) = console(100, Arc::new(UnreachableStore));

        console.on_line("");
        pump(&mut console, &mut events, |e| {
            matches!(e, Event::StateSnapshot { elapsed_secs: 5, .. })
        })
        .await;
        console.handle.send(TimerCommand::SaveEarly);
        pump(&mut console, &mut events, |e| e.completed_secs().is_some()).await;

        // Well past the point a restarted run would have ticked.
        tokio::time::sleep(Duration::from_secs(3)).await;
        console.handle.send(TimerCommand::Snapshot);
        match pump(&mut console, &mut events, is_snapshot).await {
            Event::StateSnapshot {
                state,
                elapsed_secs,
                remaining_secs,
                completion_fired,
                disabled,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(elapsed_secs, 5);
                assert_eq!(remaining_secs, 95);
                assert!(completion_fired);
                assert!(!disabled);
            }
            other => panic!("unexpected event {other:?}"),
        }

        let engine = console.handle.shutdown().await.unwrap();
        assert!(!engine.is_running());
    }

    #[test]
    fn run_goal_uses_minutes_or_stored_goal() {
        assert_eq!(run_goal_secs(None, 420), 420);
        assert_eq!(run_goal_secs(Some(20), 420), 1200);
        assert_eq!(run_goal_secs(Some(-3), 420), 60);
        assert_eq!(run_goal_secs(Some(i64::MAX), 420), u64::MAX);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input(""), Input::Command(TimerCommand::Toggle));
        assert_eq!(parse_input(" t "), Input::Command(TimerCommand::Toggle));
        assert_eq!(parse_input("s"), Input::SaveEarly);
        assert_eq!(parse_input("r"), Input::Command(TimerCommand::ResetRemaining));
        assert_eq!(parse_input("q"), Input::Quit);
        assert_eq!(parse_input("bogus"), Input::Unknown("bogus".into()));
    }

    #[test]
    fn goal_input_falls_back_to_one_minute() {
        assert_eq!(parse_input("g 20"), Input::Command(TimerCommand::EditGoal(20)));
        assert_eq!(parse_input("goal abc"), Input::Command(TimerCommand::EditGoal(1)));
        assert_eq!(parse_input("g"), Input::Command(TimerCommand::EditGoal(1)));
    }
}
