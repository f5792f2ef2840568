use dnsforever_application::ports::ZoneEventSink;
use dnsforever_domain::{ZoneChange, ZoneEvent};
use tracing::info;

/// Writes every zone event as a structured `tracing` event under the
/// `dnsforever::zone_events` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl ZoneEventSink for TracingEventSink {
    fn publish(&self, event: ZoneEvent) {
        let kind = event.kind();
        let at = event.occurred_at.to_rfc3339();
        match &event.change {
            ZoneChange::ZoneCreated { serial } | ZoneChange::ZoneReplaced { serial } => {
                info!(
                    target: "dnsforever::zone_events",
                    kind,
                    zone = %event.zone,
                    serial,
                    at = %at
                );
            }
            ZoneChange::ZoneDeleted { records } => {
                info!(
                    target: "dnsforever::zone_events",
                    kind,
                    zone = %event.zone,
                    records,
                    at = %at
                );
            }
            ZoneChange::RecordAdded {
                name,
                record_type,
                ttl,
            } => {
                info!(
                    target: "dnsforever::zone_events",
                    kind,
                    zone = %event.zone,
                    name = %name,
                    record_type = %record_type,
                    ttl,
                    at = %at
                );
            }
            ZoneChange::RecordsRemoved {
                name,
                record_type,
                count,
            } => {
                info!(
                    target: "dnsforever::zone_events",
                    kind,
                    zone = %event.zone,
                    name = %name,
                    record_type = ?record_type,
                    count,
                    at = %at
                );
            }
        }
    }
}
