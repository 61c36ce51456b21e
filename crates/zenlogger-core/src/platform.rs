//! Host services the timer depends on but does not implement.
//!
//! Each runtime owns one instance of each; the CLI and tests supply their own.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure of a best-effort platform side effect. Logged, never propagated.
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Sound playback failed for '{sound_id}': {message}")]
    Playback { sound_id: String, message: String },

    #[error("Notification {id} could not be {action}: {message}")]
    Notification {
        id: u32,
        action: &'static str,
        message: String,
    },
}

/// Plays an alert sound once.
pub trait SoundPlayer: Send {
    fn play(&mut self, sound_id: &str) -> Result<(), AlertError>;
}

/// Schedules local notifications that fire while the app is in the background.
pub trait Notifier: Send {
    fn schedule(
        &mut self,
        id: u32,
        fire_at: DateTime<Utc>,
        title: &str,
        body: &str,
    ) -> Result<(), AlertError>;

    fn cancel(&mut self, id: u32) -> Result<(), AlertError>;
}

/// Wall-clock source used for suspend/resume timestamps.
pub trait WallClock: Send {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Sound player for hosts without audio output.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, sound_id: &str) -> Result<(), AlertError> {
        tracing::info!(%sound_id, "alert sound (silent)");
        Ok(())
    }
}

/// Notifier that only records intent in the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn schedule(
        &mut self,
        id: u32,
        fire_at: DateTime<Utc>,
        title: &str,
        body: &str,
    ) -> Result<(), AlertError> {
        tracing::info!(id, %fire_at, title, body, "notification scheduled");
        Ok(())
    }

    fn cancel(&mut self, id: u32) -> Result<(), AlertError> {
        tracing::info!(id, "notification cancelled");
        Ok(())
    }
}
