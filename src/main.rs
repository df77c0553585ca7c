use std::env;
use std::time::Duration;

use life_room::logging::FileSink;
use life_room::{CliDriver, ControllerConfig, Logger};

/// Log files are truncated once they would grow past this size.
const LOG_MAX_BYTES: u64 = 1 << 20;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut config = ControllerConfig::default();

    if let Some(tick_ms) = env::var("LIFE_TICK_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
    {
        config = config.with_timeout(Duration::from_millis(tick_ms));
    }

    if let Ok(path) = env::var("LIFE_LOG") {
        config = config.with_logger(Logger::new(FileSink::new(path, LOG_MAX_BYTES)?));
    }

    CliDriver::new(config).run()?;
    Ok(())
}
