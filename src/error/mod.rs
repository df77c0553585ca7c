mod types;

pub use types::{LifeError, Result};
