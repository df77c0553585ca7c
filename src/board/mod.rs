//! Board engine orchestrator.
//!
//! The capability trait and the grid implementation live in `core`; the
//! preset glider stamp lives in `pattern`.

mod core;
pub mod pattern;

pub use self::core::{Board, LifeBoard};
pub use pattern::{GLIDER, place_glider};
