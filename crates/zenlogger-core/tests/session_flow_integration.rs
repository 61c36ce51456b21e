//! Integration tests for the timer-to-log flow.
//!
//! These drive the timer runtime the way a host does and persist what it
//! reports through the repositories.

use std::sync::Arc;

use zenlogger_core::storage::settings::DEFAULT_GOAL_SECS;
use zenlogger_core::{
    Event, LogNotifier, MemoryStore, SessionRepository, SettingsRepository, SilentPlayer,
    SqliteStore, TimerCommand, TimerEngine, TimerRuntime,
};

async fn next_completion(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Event>) -> u64 {
    loop {
        let event = rx.recv().await.expect("runtime stopped early");
        if let Some(secs) = event.completed_secs() {
            return secs;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn completed_run_is_logged_newest_first() {
    let store = Arc::new(MemoryStore::new());
    let sessions = SessionRepository::new(store.clone());
    let settings = SettingsRepository::new(store.clone());
    settings.set_goal_seconds(120).await.unwrap();

    let goal = settings.goal_seconds().await.unwrap();
    let runtime = TimerRuntime::new(
        TimerEngine::new(goal),
        Box::new(SilentPlayer),
        Box::new(LogNotifier),
    )
    .with_stall_threshold(None);
    let (handle, mut events) = runtime.spawn();

    handle.send(TimerCommand::Start);
    let secs = next_completion(&mut events).await;
    sessions.add(secs as i64).await.unwrap();

    // Second sit, saved early.
    handle.send(TimerCommand::ResetToGoal(goal));
    handle.send(TimerCommand::Start);
    tokio::time::sleep(std::time::Duration::from_millis(30_500)).await;
    handle.send(TimerCommand::SaveEarly);
    let secs = next_completion(&mut events).await;
    sessions.add(secs as i64).await.unwrap();

    handle.shutdown().await.unwrap();

    let logged = sessions.list().await.unwrap();
    assert_eq!(logged.len(), 2);
    assert_eq!(logged[0].duration_secs, 30);
    assert_eq!(logged[1].duration_secs, 120);
}

#[tokio::test]
async fn zero_length_completion_is_not_logged() {
    let store = Arc::new(MemoryStore::new());
    let sessions = SessionRepository::new(store);
    assert!(sessions.add(0).await.unwrap().is_none());
    assert!(sessions.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_store_backs_both_repositories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zen.db");

    {
        let store = Arc::new(SqliteStore::open(&path).unwrap());
        SessionRepository::new(store.clone()).add(600).await.unwrap();
        SettingsRepository::new(store).set_goal_seconds(900).await.unwrap();
    }

    let store = Arc::new(SqliteStore::open(&path).unwrap());
    let sessions = SessionRepository::new(store.clone()).list().await.unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration_secs, 600);
    assert_eq!(SettingsRepository::new(store).goal_seconds().await.unwrap(), 900);
}

#[tokio::test]
async fn fresh_store_uses_default_goal() {
    let store = Arc::new(MemoryStore::new());
    let settings = SettingsRepository::new(store);
    assert_eq!(settings.goal_seconds().await.unwrap(), DEFAULT_GOAL_SECS);
}
