use dnsforever_domain::{domain_name, DomainError, Zone, ZoneChange, ZoneEvent};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{ZoneEventSink, ZoneStore};

pub struct DeleteZoneUseCase {
    store: Arc<dyn ZoneStore>,
    events: Arc<dyn ZoneEventSink>,
}

impl DeleteZoneUseCase {
    pub fn new(store: Arc<dyn ZoneStore>, events: Arc<dyn ZoneEventSink>) -> Self {
        Self { store, events }
    }

    /// Removes the zone and all of its names in one step. Deleting a zone
    /// that does not exist is an error (`ZoneNotFound`).
    #[instrument(skip(self))]
    pub fn execute(&self, apex: &str) -> Result<Arc<Zone>, DomainError> {
        let apex = domain_name::normalize(apex);

        let removed = self
            .store
            .delete_zone(&apex)
            .ok_or_else(|| DomainError::ZoneNotFound(apex.clone()))?;

        let records = removed.record_count();
        info!(apex = %apex, records, "Zone deleted");
        self.events.publish(ZoneEvent::new(
            removed.shared_apex(),
            ZoneChange::ZoneDeleted { records },
        ));

        Ok(removed)
    }
}
