//! # Zen Logger Core Library
//!
//! Core logic for Zen Logger, a meditation session timer that keeps a log
//! of completed sits. The CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a countdown state machine driven by one-second ticks,
//!   with wall-clock reconciliation across backgrounding
//! - **Timer Runtime**: owns the tick cadence, the completion sound and the
//!   background alert
//! - **Storage**: a string key-value store (SQLite or in-memory) with typed
//!   session and settings repositories on top, plus TOML configuration
//! - **Backup**: whole-store export/import as one JSON document
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`TimerRuntime`]: async driver for the engine
//! - [`SessionRepository`]: the session log
//! - [`SettingsRepository`]: user preferences
//! - [`Config`]: application configuration

pub mod backup;
pub mod error;
pub mod events;
pub mod platform;
pub mod stats;
pub mod storage;
pub mod timer;

pub use backup::{backup_file_name, BackupDocument, ImportSummary, BACKUP_VERSION};
pub use error::{BackupError, ConfigError, CoreError, StoreError, ValidationError};
pub use events::{CompletionReason, Event};
pub use platform::{AlertError, LogNotifier, Notifier, SilentPlayer, SoundPlayer, SystemClock, WallClock};
pub use stats::{daily_totals, DayStats, Stats};
pub use storage::{
    Config, KeyValueStore, MemoryStore, Session, SessionRepository, Settings, SettingsRepository,
    SqliteStore,
};
pub use timer::{TimerCommand, TimerEngine, TimerHandle, TimerRuntime, TimerState};
