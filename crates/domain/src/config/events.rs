use serde::{Deserialize, Serialize};

/// Which sinks receive zone administration events.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventsConfig {
    /// Forward events over an in-process channel for an external consumer.
    #[serde(default)]
    pub channel: bool,

    /// Write every event through `tracing`.
    #[serde(default = "default_true")]
    pub log_events: bool,

    /// Keep running counters of administration activity.
    #[serde(default = "default_true")]
    pub metrics: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            channel: false,
            log_events: default_true(),
            metrics: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
