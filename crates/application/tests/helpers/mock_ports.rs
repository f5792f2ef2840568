#![allow(dead_code)]

use dnsforever_application::ports::{ZoneEventSink, ZoneStore};
use dnsforever_domain::{DomainError, Zone, ZoneEvent};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Default)]
pub struct MockZoneStore {
    zones: RwLock<HashMap<String, Arc<Zone>>>,
    lookups: AtomicUsize,
    updates: AtomicUsize,
}

impl MockZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        let store = Self::new();
        for zone in zones {
            store.insert(zone);
        }
        store
    }

    pub fn insert(&self, zone: Zone) {
        self.zones
            .write()
            .unwrap()
            .insert(zone.apex().to_string(), Arc::new(zone));
    }

    pub fn len(&self) -> usize {
        self.zones.read().unwrap().len()
    }

    /// Exact-apex lookups made so far, including those of `find_zone`.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// `update_zone` calls made so far, failed ones included.
    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::Relaxed)
    }
}

impl ZoneStore for MockZoneStore {
    fn get_zone(&self, apex: &str) -> Option<Arc<Zone>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.zones.read().unwrap().get(apex).cloned()
    }

    fn create_zone(&self, zone: Zone) -> Result<Arc<Zone>, DomainError> {
        let mut zones = self.zones.write().unwrap();
        if zones.contains_key(zone.apex()) {
            return Err(DomainError::ZoneAlreadyExists(zone.apex().to_string()));
        }
        let zone = Arc::new(zone);
        zones.insert(zone.apex().to_string(), Arc::clone(&zone));
        Ok(zone)
    }

    fn create_or_replace_zone(&self, zone: Zone) -> (Arc<Zone>, Option<Arc<Zone>>) {
        let zone = Arc::new(zone);
        let previous = self
            .zones
            .write()
            .unwrap()
            .insert(zone.apex().to_string(), Arc::clone(&zone));
        (zone, previous)
    }

    fn update_zone(
        &self,
        apex: &str,
        update: &mut dyn FnMut(&mut Zone) -> Result<(), DomainError>,
    ) -> Result<Arc<Zone>, DomainError> {
        self.updates.fetch_add(1, Ordering::Relaxed);
        let mut zones = self.zones.write().unwrap();
        let current = zones
            .get(apex)
            .ok_or_else(|| DomainError::ZoneNotFound(apex.to_string()))?;
        let mut next = Zone::clone(current);
        update(&mut next)?;
        let next = Arc::new(next);
        zones.insert(apex.to_string(), Arc::clone(&next));
        Ok(next)
    }

    fn delete_zone(&self, apex: &str) -> Option<Arc<Zone>> {
        self.zones.write().unwrap().remove(apex)
    }

    fn zone_names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self
            .zones
            .read()
            .unwrap()
            .keys()
            .map(|name| Arc::from(name.as_str()))
            .collect();
        names.sort();
        names
    }
}

#[derive(Default)]
pub struct MockEventSink {
    events: Mutex<Vec<ZoneEvent>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ZoneEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|e| e.kind()).collect()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl ZoneEventSink for MockEventSink {
    fn publish(&self, event: ZoneEvent) {
        self.events.lock().unwrap().push(event);
    }
}
