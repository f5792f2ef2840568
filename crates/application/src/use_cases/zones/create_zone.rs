use dnsforever_domain::{DomainError, ResourceRecord, Zone, ZoneChange, ZoneEvent};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{ZoneEventSink, ZoneStore};

pub struct CreateZoneUseCase {
    store: Arc<dyn ZoneStore>,
    events: Arc<dyn ZoneEventSink>,
}

impl CreateZoneUseCase {
    pub fn new(store: Arc<dyn ZoneStore>, events: Arc<dyn ZoneEventSink>) -> Self {
        Self { store, events }
    }

    /// Creates the zone rooted at `apex`; fails with `ZoneAlreadyExists`
    /// rather than touching an existing zone.
    #[instrument(skip(self, soa))]
    pub fn execute(&self, apex: &str, soa: ResourceRecord) -> Result<Arc<Zone>, DomainError> {
        let zone = Zone::new(apex, soa)?;
        let serial = zone.serial();

        let zone = self.store.create_zone(zone).inspect_err(|e| {
            warn!(apex = %apex, error = %e, "Zone creation rejected");
        })?;

        info!(apex = %zone.apex(), serial, "Zone created");
        self.events
            .publish(ZoneEvent::new(zone.shared_apex(), ZoneChange::ZoneCreated { serial }));

        Ok(zone)
    }

    /// Creates the zone, atomically discarding any existing zone with the
    /// same apex together with all of its records.
    #[instrument(skip(self, soa))]
    pub fn execute_or_replace(
        &self,
        apex: &str,
        soa: ResourceRecord,
    ) -> Result<Arc<Zone>, DomainError> {
        let zone = Zone::new(apex, soa)?;
        let serial = zone.serial();

        let (zone, previous) = self.store.create_or_replace_zone(zone);
        let change = match previous {
            Some(previous) => {
                info!(
                    apex = %zone.apex(),
                    serial,
                    previous_serial = previous.serial(),
                    "Zone replaced"
                );
                ZoneChange::ZoneReplaced { serial }
            }
            None => {
                info!(apex = %zone.apex(), serial, "Zone created");
                ZoneChange::ZoneCreated { serial }
            }
        };
        self.events
            .publish(ZoneEvent::new(zone.shared_apex(), change));

        Ok(zone)
    }
}
