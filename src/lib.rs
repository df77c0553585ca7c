//! Conway's Game of Life on a bounded grid with an interactive terminal
//! editor.
//!
//! [`Board`] is the simulation engine. [`Controller`] runs the editor loop
//! over any [`Surface`]; [`CliDriver`] wires it to a real terminal.

pub mod board;
pub mod controller;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod width;

pub use board::{Board, GLIDER, LifeBoard, place_glider};
pub use controller::{ControlFlow, Controller, ControllerConfig};
pub use cursor::{Cursor, Direction};
pub use driver::{CliDriver, CliDriverError, DriverResult};
pub use error::{LifeError, Result};
pub use geometry::{Point, Rect, Size, Viewport, ensure_in_range};
pub use input::{Action, InputEvent, Mode, action_for};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, SessionMetrics};
pub use render::{MemorySurface, Surface, TerminalSurface};
pub use width::display_width;
