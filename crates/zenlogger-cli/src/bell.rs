//! Terminal stand-ins for the platform alert services.

use std::io::Write;

use zenlogger_core::{AlertError, SoundPlayer};

/// Rings the terminal bell in place of playing the chosen sound.
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&mut self, sound_id: &str) -> Result<(), AlertError> {
        let mut out = std::io::stdout();
        out.write_all(b"\x07")
            .and_then(|()| out.flush())
            .map_err(|e| AlertError::Playback {
                sound_id: sound_id.to_string(),
                message: e.to_string(),
            })?;
        tracing::debug!(%sound_id, "bell rung");
        Ok(())
    }
}
