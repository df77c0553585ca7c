//! Interactive controller: owns the board, the cursor and the paused flag,
//! and drives the frame → wait → dispatch loop over a [`Surface`].

mod config;

pub use config::ControllerConfig;

use std::time::Instant;

use serde_json::{Value, json};

use crate::board::{Board, LifeBoard, place_glider};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::geometry::{Size, Viewport};
use crate::input::{Action, InputEvent, Mode, action_for};
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::metrics::{MetricSnapshot, SessionMetrics};
use crate::render::Surface;
use crate::width::{clip_to_width, display_width, pad_to_width};

pub const LOG_TARGET: &str = "life::controller";

const HELP_LINES: [&str; 5] = [
    "Navigate cursor with arrows",
    "Press <space> for placing cell",
    "Press <g> for placing glider",
    "Press <s> for start/stop",
    "Press <q> for quit",
];
const PAUSED_LABEL: &str = "PAUSED";

/// Whether the loop keeps going after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

pub struct Controller {
    board: Board,
    viewport: Viewport,
    cursor: Cursor,
    mode: Mode,
    generation: u64,
    config: ControllerConfig,
    metrics: SessionMetrics,
    started: Instant,
}

impl Controller {
    pub fn new(size: Size) -> Result<Self> {
        Self::with_config(size, ControllerConfig::default())
    }

    /// Lay out a controller for a display of `size`. The board takes every
    /// cell the cursor can reach.
    pub fn with_config(size: Size, config: ControllerConfig) -> Result<Self> {
        let viewport = Viewport::new(size)?;
        let board_size = viewport.board_size();
        Ok(Self {
            board: Board::new(board_size.width.into(), board_size.height.into()),
            cursor: Cursor::new(&viewport),
            viewport,
            mode: Mode::Paused,
            generation: 0,
            config,
            metrics: SessionMetrics::new(),
            started: Instant::now(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot(self.started.elapsed())
    }

    /// Run until the quit key arrives. Nothing is drawn after that.
    pub fn run(&mut self, surface: &mut impl Surface) -> Result<()> {
        self.started = Instant::now();
        let board_size = self.viewport.board_size();
        self.log(
            LogLevel::Info,
            "controller_started",
            [
                json_kv("board_width", board_size.width),
                json_kv("board_height", board_size.height),
                json_kv("timeout_ms", self.config.timeout.as_millis() as u64),
            ],
        );

        loop {
            self.frame(surface)?;
            let Some(event) = surface.poll_input(self.config.timeout)? else {
                continue;
            };
            if self.dispatch(event) == ControlFlow::Quit {
                break;
            }
        }

        self.finalize();
        Ok(())
    }

    /// One frame: advance when running, then draw board, sidebar and, while
    /// paused, the cursor marker.
    pub fn frame(&mut self, surface: &mut impl Surface) -> Result<()> {
        if self.mode == Mode::Running {
            self.step();
        }
        self.render(surface)
    }

    /// Handle one input event. Events without a key code and unknown keys
    /// are dropped.
    pub fn dispatch(&mut self, event: InputEvent) -> ControlFlow {
        let Some(code) = event.key_code else {
            return ControlFlow::Continue;
        };
        match action_for(code, self.mode) {
            Some(action) => self.apply(action),
            None => {
                self.metrics.record_ignored_key();
                ControlFlow::Continue
            }
        }
    }

    fn apply(&mut self, action: Action) -> ControlFlow {
        match action {
            Action::Move(direction) => self.cursor.move_by(direction),
            Action::ToggleCell => {
                let (row, col) = self.viewport.to_board(self.cursor.position());
                self.board.toggle(row, col);
                self.metrics.record_edit();
                self.log(
                    LogLevel::Debug,
                    "cell_toggled",
                    [
                        json_kv("row", row),
                        json_kv("col", col),
                        json_kv("alive", self.board.is_alive(row, col)),
                    ],
                );
            }
            Action::PlaceGlider => {
                let (row, col) = self.viewport.to_board(self.cursor.position());
                place_glider(&mut self.board, row, col);
                self.metrics.record_edit();
                self.log(
                    LogLevel::Debug,
                    "pattern_placed",
                    [
                        json_kv("pattern", "glider"),
                        json_kv("row", row),
                        json_kv("col", col),
                    ],
                );
            }
            Action::TogglePause => {
                self.mode = self.mode.toggled();
                self.log(
                    LogLevel::Info,
                    "mode_changed",
                    [
                        json_kv("mode", mode_label(self.mode)),
                        json_kv("generation", self.generation),
                    ],
                );
            }
            Action::Quit => {
                self.log(LogLevel::Info, "quit_requested", std::iter::empty());
                return ControlFlow::Quit;
            }
        }
        ControlFlow::Continue
    }

    fn step(&mut self) {
        self.board.advance();
        self.generation += 1;
        self.metrics.record_generation();
    }

    fn render(&mut self, surface: &mut impl Surface) -> Result<()> {
        surface.fill_region(self.viewport.board_pane())?;
        surface.print_at(
            &self.board.to_string(),
            self.viewport.cell_column(0),
            self.viewport.cell_row(0),
        )?;
        self.render_sidebar(surface)?;
        if self.mode.is_paused() {
            self.render_cursor(surface)?;
        }
        surface.refresh()?;
        self.metrics.record_frame();
        Ok(())
    }

    fn render_sidebar(&self, surface: &mut impl Surface) -> Result<()> {
        let size = self.viewport.size();
        let column = self.viewport.sidebar_column();
        let width = usize::from(size.width.saturating_sub(column));
        if width == 0 {
            return Ok(());
        }

        // Only the pause slot changes length; it is blanked to the label's
        // width so board cells further right stay visible.
        let help = HELP_LINES
            .iter()
            .map(|line| clip_to_width(line, width))
            .collect::<Vec<_>>()
            .join("\n");
        surface.print_at(&help, column, 1)?;

        let generation = format!("Generation: {}", self.generation);
        surface.print_at(
            &clip_to_width(&generation, width),
            column,
            size.height.saturating_sub(1),
        )?;

        let pause = if self.mode.is_paused() { PAUSED_LABEL } else { "" };
        let pause_width = display_width(PAUSED_LABEL).min(width);
        surface.print_at(&pad_to_width(pause, pause_width), column, size.height / 2)
    }

    fn render_cursor(&self, surface: &mut impl Surface) -> Result<()> {
        let (row, col) = self.viewport.to_board(self.cursor.position());
        let glyph = if self.board.is_alive(row, col) { 'o' } else { '.' };
        surface.print_at(
            &format!("<{glyph}>"),
            self.viewport.cell_column(col).saturating_sub(1),
            self.viewport.cell_row(row),
        )
    }

    fn finalize(&mut self) {
        let snapshot = self.metrics();
        let mut event = snapshot.to_log_event(LOG_TARGET, "controller_stopped");
        event
            .fields
            .insert("generation".to_string(), json!(self.generation));
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(event);
        }
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(event_with_fields(level, LOG_TARGET, message, fields));
        }
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Paused => "paused",
        Mode::Running => "running",
    }
}
