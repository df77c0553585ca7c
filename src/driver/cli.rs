use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use thiserror::Error;

use crate::{Controller, ControllerConfig, LifeError, Size, TerminalSurface};

pub type DriverResult<T> = std::result::Result<T, CliDriverError>;

#[derive(Debug, Error)]
pub enum CliDriverError {
    #[error("controller error: {0}")]
    Runtime(#[from] LifeError),
    #[error("terminal error: {0}")]
    Terminal(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver that sizes a [`Controller`] from the real terminal and
/// runs it with raw mode and the alternate screen enabled. The terminal is
/// restored however the controller returns.
pub struct CliDriver {
    config: ControllerConfig,
}

impl CliDriver {
    pub fn new(config: ControllerConfig) -> Self {
        Self { config }
    }

    pub fn run(self) -> DriverResult<()> {
        let mut stdout = io::stdout();
        with_terminal(
            &mut stdout,
            |out| self.enter(out),
            |out| self.run_inner(out),
            |out| self.exit(out),
        )
    }

    fn run_inner(&self, stdout: &mut impl Write) -> DriverResult<()> {
        let (width, height) = terminal::size()?;
        let size = Size::new(width, height);
        let mut controller = Controller::with_config(size, self.config.clone())?;
        let mut surface = TerminalSurface::new(stdout, size);
        controller.run(&mut surface)?;
        Ok(())
    }

    fn enter(&self, stdout: &mut impl Write) -> DriverResult<()> {
        terminal::enable_raw_mode().map_err(|err| CliDriverError::Terminal(err.to_string()))?;
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(())
    }

    fn exit(&self, stdout: &mut impl Write) {
        execute!(stdout, Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

/// Run `body` between `enter` and `exit`. `exit` runs whatever happens,
/// including when `enter` fails half-way (raw mode on, screen not switched).
fn with_terminal<W, T>(
    out: &mut W,
    enter: impl FnOnce(&mut W) -> DriverResult<()>,
    body: impl FnOnce(&mut W) -> DriverResult<T>,
    exit: impl FnOnce(&mut W),
) -> DriverResult<T> {
    let result = enter(out).and_then(|()| body(out));
    exit(out);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_runs_when_enter_fails() {
        let mut log = Vec::new();
        let result: DriverResult<()> = with_terminal(
            &mut log,
            |log| {
                log.push("enter");
                Err(CliDriverError::Terminal("alternate screen refused".into()))
            },
            |log| {
                log.push("body");
                Ok(())
            },
            |log| log.push("exit"),
        );

        assert!(matches!(result, Err(CliDriverError::Terminal(_))));
        assert_eq!(log, vec!["enter", "exit"]);
    }

    #[test]
    fn exit_runs_after_body_error() {
        let mut log = Vec::new();
        let result: DriverResult<()> = with_terminal(
            &mut log,
            |log| {
                log.push("enter");
                Ok(())
            },
            |log| {
                log.push("body");
                Err(CliDriverError::Runtime(LifeError::Terminal("gone".into())))
            },
            |log| log.push("exit"),
        );

        assert!(matches!(result, Err(CliDriverError::Runtime(_))));
        assert_eq!(log, vec!["enter", "body", "exit"]);
    }

    #[test]
    fn body_result_is_returned() {
        let mut log: Vec<&str> = Vec::new();
        let result = with_terminal(&mut log, |_| Ok(()), |_| Ok(42), |log| log.push("exit"));
        assert_eq!(result.unwrap(), 42);
        assert_eq!(log, vec!["exit"]);
    }
}
