mod engine;
mod format;
mod runtime;

pub use engine::{TimerEngine, TimerState, MAX_GOAL_SECS};
pub use format::{format_clock, format_duration};
pub use runtime::{TimerCommand, TimerHandle, TimerRuntime, ALERT_NOTIFICATION_ID};
