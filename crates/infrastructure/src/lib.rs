//! dnsforever infrastructure: the in-memory zone store, event sinks and
//! logging setup.
pub mod events;
pub mod logging;
pub mod zone_store;

pub use events::{FanoutEventSink, TracingEventSink, ZoneEventEmitter, ZoneMetrics};
pub use logging::init_logging;
pub use zone_store::InMemoryZoneStore;
