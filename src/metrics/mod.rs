use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters accumulated over one editor session.
#[derive(Debug, Default, Clone)]
pub struct SessionMetrics {
    frames: u64,
    generations: u64,
    edits: u64,
    ignored_keys: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    pub fn record_generation(&mut self) {
        self.generations = self.generations.saturating_add(1);
    }

    pub fn record_edit(&mut self) {
        self.edits = self.edits.saturating_add(1);
    }

    pub fn record_ignored_key(&mut self) {
        self.ignored_keys = self.ignored_keys.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            frames: self.frames,
            generations: self.generations,
            edits: self.edits,
            ignored_keys: self.ignored_keys,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub frames: u64,
    pub generations: u64,
    pub edits: u64,
    pub ignored_keys: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str, message: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, message, self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("frames".to_string(), json!(self.frames));
        map.insert("generations".to_string(), json!(self.generations));
        map.insert("edits".to_string(), json!(self.edits));
        map.insert("ignored_keys".to_string(), json!(self.ignored_keys));
        map
    }
}
