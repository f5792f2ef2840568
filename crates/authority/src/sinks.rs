use dnsforever_application::ports::ZoneEventSink;
use dnsforever_domain::{EventsConfig, ZoneEvent};
use dnsforever_infrastructure::{FanoutEventSink, TracingEventSink, ZoneEventEmitter, ZoneMetrics};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The observability sinks selected by an [`EventsConfig`], combined into
/// the single sink the administration use cases publish to.
pub struct EventSinks {
    pub sink: Arc<dyn ZoneEventSink>,
    pub metrics: Option<ZoneMetrics>,
    pub receiver: Option<mpsc::UnboundedReceiver<ZoneEvent>>,
}

impl EventSinks {
    pub fn from_config(config: &EventsConfig) -> Self {
        let mut fanout = FanoutEventSink::new();

        if config.log_events {
            fanout = fanout.with_sink(Arc::new(TracingEventSink));
        }

        let metrics = config.metrics.then(ZoneMetrics::new);
        if let Some(metrics) = &metrics {
            fanout = fanout.with_sink(Arc::new(metrics.clone()));
        }

        let receiver = if config.channel {
            let (emitter, rx) = ZoneEventEmitter::new_enabled();
            fanout = fanout.with_sink(Arc::new(emitter));
            Some(rx)
        } else {
            None
        };

        Self {
            sink: Arc::new(fanout),
            metrics,
            receiver,
        }
    }
}
