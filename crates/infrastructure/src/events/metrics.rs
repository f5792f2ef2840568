use dashmap::DashMap;
use dnsforever_application::ports::ZoneEventSink;
use dnsforever_domain::{RecordType, ZoneChange, ZoneEvent};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Running counters of zone administration activity.
#[derive(Clone)]
pub struct ZoneMetrics {
    total_events: Arc<AtomicU64>,

    zones_created: Arc<AtomicU64>,

    zones_replaced: Arc<AtomicU64>,

    zones_deleted: Arc<AtomicU64>,

    records_added: Arc<AtomicU64>,

    records_removed: Arc<AtomicU64>,

    record_type_counts: Arc<DashMap<RecordType, u64, FxBuildHasher>>,

    zone_event_counts: Arc<DashMap<Arc<str>, u64, FxBuildHasher>>,
}

impl ZoneMetrics {
    pub fn new() -> Self {
        Self {
            total_events: Arc::new(AtomicU64::new(0)),
            zones_created: Arc::new(AtomicU64::new(0)),
            zones_replaced: Arc::new(AtomicU64::new(0)),
            zones_deleted: Arc::new(AtomicU64::new(0)),
            records_added: Arc::new(AtomicU64::new(0)),
            records_removed: Arc::new(AtomicU64::new(0)),
            record_type_counts: Arc::new(DashMap::with_hasher(FxBuildHasher)),
            zone_event_counts: Arc::new(DashMap::with_hasher(FxBuildHasher)),
        }
    }

    pub fn track(&self, event: &ZoneEvent) {
        self.total_events.fetch_add(1, Ordering::Relaxed);

        match &event.change {
            ZoneChange::ZoneCreated { .. } => {
                self.zones_created.fetch_add(1, Ordering::Relaxed);
            }
            ZoneChange::ZoneReplaced { .. } => {
                self.zones_replaced.fetch_add(1, Ordering::Relaxed);
            }
            ZoneChange::ZoneDeleted { .. } => {
                self.zones_deleted.fetch_add(1, Ordering::Relaxed);
            }
            ZoneChange::RecordAdded { record_type, .. } => {
                self.records_added.fetch_add(1, Ordering::Relaxed);
                self.record_type_counts
                    .entry(*record_type)
                    .and_modify(|c| *c += 1)
                    .or_insert(1);
            }
            ZoneChange::RecordsRemoved { count, .. } => {
                self.records_removed
                    .fetch_add(*count as u64, Ordering::Relaxed);
            }
        }

        // A deleted zone's history goes with it.
        if matches!(event.change, ZoneChange::ZoneDeleted { .. }) {
            self.zone_event_counts.remove(&event.zone);
        } else {
            self.zone_event_counts
                .entry(event.zone.clone())
                .and_modify(|c| *c += 1)
                .or_insert(1);
        }
    }

    pub fn total_events(&self) -> u64 {
        self.total_events.load(Ordering::Relaxed)
    }

    pub fn zones_created(&self) -> u64 {
        self.zones_created.load(Ordering::Relaxed)
    }

    pub fn zones_replaced(&self) -> u64 {
        self.zones_replaced.load(Ordering::Relaxed)
    }

    pub fn zones_deleted(&self) -> u64 {
        self.zones_deleted.load(Ordering::Relaxed)
    }

    pub fn records_added(&self) -> u64 {
        self.records_added.load(Ordering::Relaxed)
    }

    pub fn records_removed(&self) -> u64 {
        self.records_removed.load(Ordering::Relaxed)
    }

    pub fn record_type_count(&self, record_type: RecordType) -> u64 {
        self.record_type_counts
            .get(&record_type)
            .map(|v| *v)
            .unwrap_or(0)
    }

    pub fn zone_event_count(&self, zone: &str) -> u64 {
        self.zone_event_counts.get(zone).map(|v| *v).unwrap_or(0)
    }

    pub fn busiest_zones(&self, n: usize) -> Vec<(String, u64)> {
        let mut zones: Vec<_> = self
            .zone_event_counts
            .iter()
            .map(|entry| (entry.key().to_string(), *entry.value()))
            .collect();

        zones.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        zones.truncate(n);
        zones
    }

    pub fn reset(&self) {
        self.total_events.store(0, Ordering::Relaxed);
        self.zones_created.store(0, Ordering::Relaxed);
        self.zones_replaced.store(0, Ordering::Relaxed);
        self.zones_deleted.store(0, Ordering::Relaxed);
        self.records_added.store(0, Ordering::Relaxed);
        self.records_removed.store(0, Ordering::Relaxed);
        self.record_type_counts.clear();
        self.zone_event_counts.clear();
    }
}

impl ZoneEventSink for ZoneMetrics {
    fn publish(&self, event: ZoneEvent) {
        self.track(&event);
    }
}

impl Default for ZoneMetrics {
    fn default() -> Self {
        Self::new()
    }
}
