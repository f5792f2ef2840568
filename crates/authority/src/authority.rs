use dnsforever_application::ports::{ZoneEventSink, ZoneStore};
use dnsforever_application::use_cases::{
    AddRecordUseCase, CreateZoneUseCase, DeleteZoneUseCase, RecordInput, RemoveRecordsUseCase,
    ResolveQueryUseCase,
};
use dnsforever_domain::{
    Config, DnsQuery, DomainError, RecordClass, RecordType, ResourceRecord, Resolution, Zone,
    ZoneEvent,
};
use dnsforever_infrastructure::{InMemoryZoneStore, ZoneMetrics};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::sinks::EventSinks;

/// The authoritative engine: one zone store plus the operations that read
/// and administer it.
///
/// Cheap to share behind an `Arc`; every method takes `&self` and may be
/// called from any number of threads at once.
pub struct Authority {
    store: Arc<dyn ZoneStore>,
    resolve: ResolveQueryUseCase,
    create_zone: CreateZoneUseCase,
    delete_zone: DeleteZoneUseCase,
    add_record: AddRecordUseCase,
    remove_records: RemoveRecordsUseCase,
    metrics: Option<ZoneMetrics>,
}

impl Authority {
    /// Builds an engine with the sinks `config.events` asks for. When the
    /// event channel is enabled its receiver is dropped; use
    /// [`Authority::with_event_channel`] to keep it.
    pub fn new(config: &Config) -> Self {
        Self::with_event_channel(config).0
    }

    /// Like [`Authority::new`], also handing back the receiving end of the
    /// event channel when `config.events.channel` is set.
    pub fn with_event_channel(
        config: &Config,
    ) -> (Self, Option<mpsc::UnboundedReceiver<ZoneEvent>>) {
        let sinks = EventSinks::from_config(&config.events);
        debug!(
            log_events = config.events.log_events,
            metrics = config.events.metrics,
            channel = config.events.channel,
            "Wiring authority"
        );
        let authority = Self::build(
            Arc::new(InMemoryZoneStore::new()),
            sinks.sink,
            sinks.metrics,
        );
        (authority, sinks.receiver)
    }

    /// Wires the use cases over caller-supplied ports.
    pub fn from_parts(store: Arc<dyn ZoneStore>, events: Arc<dyn ZoneEventSink>) -> Self {
        Self::build(store, events, None)
    }

    fn build(
        store: Arc<dyn ZoneStore>,
        events: Arc<dyn ZoneEventSink>,
        metrics: Option<ZoneMetrics>,
    ) -> Self {
        Self {
            resolve: ResolveQueryUseCase::new(Arc::clone(&store)),
            create_zone: CreateZoneUseCase::new(Arc::clone(&store), Arc::clone(&events)),
            delete_zone: DeleteZoneUseCase::new(Arc::clone(&store), Arc::clone(&events)),
            add_record: AddRecordUseCase::new(Arc::clone(&store), Arc::clone(&events)),
            remove_records: RemoveRecordsUseCase::new(Arc::clone(&store), events),
            store,
            metrics,
        }
    }

    pub fn resolve(
        &self,
        name: &str,
        class: RecordClass,
        record_type: RecordType,
    ) -> Result<Resolution, DomainError> {
        self.resolve
            .execute(&DnsQuery::new(name, record_type).with_class(class))
    }

    /// Resolves a question given as the numeric QCLASS and QTYPE a message
    /// parser produces.
    pub fn resolve_codes(
        &self,
        name: &str,
        class: u16,
        record_type: u16,
    ) -> Result<Resolution, DomainError> {
        self.resolve.execute(&DnsQuery::from_codes(name, class, record_type)?)
    }

    pub fn resolve_query(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        self.resolve.execute(query)
    }

    pub fn create_zone(&self, apex: &str, soa: ResourceRecord) -> Result<Arc<Zone>, DomainError> {
        self.create_zone.execute(apex, soa)
    }

    pub fn create_or_replace_zone(
        &self,
        apex: &str,
        soa: ResourceRecord,
    ) -> Result<Arc<Zone>, DomainError> {
        self.create_zone.execute_or_replace(apex, soa)
    }

    pub fn add_record<S: AsRef<str>>(
        &self,
        zone_apex: &str,
        ttl: u32,
        type_tag: &str,
        subdomain: &str,
        record_class: &str,
        raw_data: &[S],
    ) -> Result<Arc<ResourceRecord>, DomainError> {
        self.add_record
            .execute(zone_apex, ttl, type_tag, subdomain, record_class, raw_data)
    }

    /// Adds a whole batch to an existing zone in one update. Loaders should
    /// prefer this over one `add_record` call per record.
    pub fn add_records(
        &self,
        zone_apex: &str,
        records: &[RecordInput],
    ) -> Result<Vec<Arc<ResourceRecord>>, DomainError> {
        self.add_record.execute_batch(zone_apex, records)
    }

    pub fn remove_records(
        &self,
        zone_apex: &str,
        subdomain: &str,
        type_tag: Option<&str>,
    ) -> Result<usize, DomainError> {
        self.remove_records.execute(zone_apex, subdomain, type_tag)
    }

    pub fn delete_zone(&self, apex: &str) -> Result<Arc<Zone>, DomainError> {
        self.delete_zone.execute(apex)
    }

    /// The current snapshot of the zone rooted exactly at `apex`.
    pub fn zone(&self, apex: &str) -> Option<Arc<Zone>> {
        self.store
            .get_zone(&dnsforever_domain::domain_name::normalize(apex))
    }

    pub fn zone_names(&self) -> Vec<Arc<str>> {
        self.store.zone_names()
    }

    /// Administration counters, when enabled in the events configuration.
    pub fn metrics(&self) -> Option<&ZoneMetrics> {
        self.metrics.as_ref()
    }
}
