//! Terminal setup and the event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, info, instrument, warn};

use crate::app::App;
use crate::ui;

/// Raw-mode terminal that restores the screen on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        enter_screen(&mut stdout)?;
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore(&mut io::stdout());
                Err(e).context("Failed to create terminal")
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Switches `out` to the alternate screen with mouse capture.
///
/// On failure raw mode and the screen are restored before returning.
fn enter_screen<W: Write>(out: &mut W) -> Result<()> {
    if let Err(e) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
        restore(out);
        return Err(e).context("Failed to enter alternate screen");
    }
    Ok(())
}

/// Leaves raw mode, the alternate screen, and mouse capture. Best effort.
fn restore<W: Write>(out: &mut W) {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the game until the user quits.
///
/// Events are handled one at a time on this thread; each handler finishes
/// before the next event is read.
#[instrument(skip_all)]
pub fn run(mut app: App) -> Result<()> {
    info!("Starting tic-tac-toe");
    let mut guard = TerminalGuard::enter()?;

    while !app.should_quit() {
        let mut layout = None;
        guard
            .terminal
            .draw(|frame| layout = Some(ui::draw(frame, &app)))
            .context("Failed to draw frame")?;
        if let Some(layout) = layout {
            app.set_layout(layout);
        }

        let event = event::read().context("Failed to read terminal event")?;
        app.handle_event(event);
    }

    info!(scores = %app.engine().scores(), "Game closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that rejects its first write and records everything after.
    #[derive(Default)]
    struct FailFirstWrite {
        failed: bool,
        written: Vec<u8>,
    }

    impl Write for FailFirstWrite {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("terminal unavailable"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_screen_entry_restores_terminal() {
        let mut out = FailFirstWrite::default();

        assert!(enter_screen(&mut out).is_err());

        let written = String::from_utf8_lossy(&out.written);
        assert!(written.contains("\x1b[?1049l"), "alternate screen left: {:?}", written);
        assert!(written.contains("\x1b[?1000l"), "mouse capture disabled: {:?}", written);
    }

    #[test]
    fn test_screen_entry_writes_setup_sequences() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049h"));
        assert!(!written.contains("\x1b[?1049l"));
    }
}
