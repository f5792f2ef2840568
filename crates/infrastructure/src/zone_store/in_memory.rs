//! Zone store with lock-free reads.
//!
//! Every zone sits behind its own `ArcSwap`, so a lookup is one shard read
//! on the map plus an atomic load. Writers never mutate a published zone:
//! they copy it, change the copy and compare-and-swap it in.
use arc_swap::ArcSwap;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use dnsforever_application::ports::ZoneStore;
use dnsforever_domain::{DomainError, Zone};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::debug;

type ZoneSlot = Arc<ArcSwap<Zone>>;

pub struct InMemoryZoneStore {
    zones: DashMap<Arc<str>, ZoneSlot, FxBuildHasher>,
}

impl InMemoryZoneStore {
    pub fn new() -> Self {
        Self {
            zones: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    fn slot(&self, apex: &str) -> Option<ZoneSlot> {
        self.zones.get(apex).map(|entry| Arc::clone(entry.value()))
    }

    fn is_current_slot(&self, apex: &str, slot: &ZoneSlot) -> bool {
        self.zones
            .get(apex)
            .is_some_and(|entry| Arc::ptr_eq(entry.value(), slot))
    }
}

impl Default for InMemoryZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneStore for InMemoryZoneStore {
    fn get_zone(&self, apex: &str) -> Option<Arc<Zone>> {
        self.zones.get(apex).map(|entry| entry.value().load_full())
    }

    fn create_zone(&self, zone: Zone) -> Result<Arc<Zone>, DomainError> {
        match self.zones.entry(zone.shared_apex()) {
            Entry::Occupied(entry) => {
                Err(DomainError::ZoneAlreadyExists(entry.key().to_string()))
            }
            Entry::Vacant(entry) => {
                let zone = Arc::new(zone);
                entry.insert(Arc::new(ArcSwap::new(Arc::clone(&zone))));
                Ok(zone)
            }
        }
    }

    fn create_or_replace_zone(&self, zone: Zone) -> (Arc<Zone>, Option<Arc<Zone>>) {
        let zone = Arc::new(zone);
        match self.zones.entry(zone.shared_apex()) {
            Entry::Occupied(entry) => {
                let previous = entry.get().swap(Arc::clone(&zone));
                (zone, Some(previous))
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(ArcSwap::new(Arc::clone(&zone))));
                (zone, None)
            }
        }
    }

    fn update_zone(
        &self,
        apex: &str,
        update: &mut dyn FnMut(&mut Zone) -> Result<(), DomainError>,
    ) -> Result<Arc<Zone>, DomainError> {
        let slot = self
            .slot(apex)
            .ok_or_else(|| DomainError::ZoneNotFound(apex.to_string()))?;

        loop {
            let current = slot.load_full();
            let mut next = Zone::clone(&current);
            update(&mut next)?;
            let next = Arc::new(next);

            let previous = slot.compare_and_swap(&current, Arc::clone(&next));
            if Arc::ptr_eq(&*previous, &current) {
                break if self.is_current_slot(apex, &slot) {
                    Ok(next)
                } else {
                    // Deleted (or deleted and re-created) while we wrote.
                    Err(DomainError::ZoneNotFound(apex.to_string()))
                };
            }
            debug!(apex = %apex, "Concurrent zone update, retrying");
        }
    }

    fn delete_zone(&self, apex: &str) -> Option<Arc<Zone>> {
        self.zones.remove(apex).map(|(_, slot)| slot.load_full())
    }

    fn zone_names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self
            .zones
            .iter()
            .map(|entry| Arc::clone(entry.key()))
            .collect();
        names.sort();
        names
    }
}
