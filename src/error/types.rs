use thiserror::Error;

/// Unified result type for the life_room crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors surfaced by the board fixtures and the terminal surface.
///
/// Out-of-range board coordinates are not represented here: they are
/// caller bugs and panic inside the board engine.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("terminal backend error: {0}")]
    Terminal(String),
    #[error("invalid board pattern: {0}")]
    Pattern(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
