use std::time::Duration;

use crate::logging::Logger;

/// Configuration knobs for the controller loop.
#[derive(Clone)]
pub struct ControllerConfig {
    /// Longest wait for one input event. Also the tick rate while running.
    pub timeout: Duration,
    /// Optional structured logger used by the controller.
    pub logger: Option<Logger>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(330),
            logger: None,
        }
    }
}

impl ControllerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }
}
