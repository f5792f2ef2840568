pub mod emitter;
pub mod fanout;
pub mod metrics;
pub mod tracing_sink;

pub use emitter::ZoneEventEmitter;
pub use fanout::FanoutEventSink;
pub use metrics::ZoneMetrics;
pub use tracing_sink::TracingEventSink;
