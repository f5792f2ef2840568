use dnsforever_domain::ZoneEvent;

/// Receives structured events for zone administration. Publishing must not
/// fail or block the administration call.
pub trait ZoneEventSink: Send + Sync {
    fn publish(&self, event: ZoneEvent);
}
