mod zone_event_sink;
mod zone_store;

pub use zone_event_sink::ZoneEventSink;
pub use zone_store::ZoneStore;
