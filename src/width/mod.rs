mod utils;

pub use utils::{clip_to_width, display_width, pad_to_width};
