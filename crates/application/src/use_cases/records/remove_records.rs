use dnsforever_domain::{domain_name, DomainError, RecordType, Zone, ZoneChange, ZoneEvent};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{ZoneEventSink, ZoneStore};

pub struct RemoveRecordsUseCase {
    store: Arc<dyn ZoneStore>,
    events: Arc<dyn ZoneEventSink>,
}

impl RemoveRecordsUseCase {
    pub fn new(store: Arc<dyn ZoneStore>, events: Arc<dyn ZoneEventSink>) -> Self {
        Self { store, events }
    }

    /// Removes the records of `type_tag` (every type when `None` or a
    /// wildcard tag such as `ANY`) owned by `subdomain.zone_apex` and
    /// returns how many went. The zone SOA is never removed.
    #[instrument(skip(self))]
    pub fn execute(
        &self,
        zone_apex: &str,
        subdomain: &str,
        type_tag: Option<&str>,
    ) -> Result<usize, DomainError> {
        let apex = domain_name::canonicalize(zone_apex)?;
        let record_type = type_tag
            .map(|tag| {
                RecordType::from_str(tag)
                    .map_err(|_| DomainError::UnsupportedRecordType(tag.to_string()))
            })
            .transpose()?
            .filter(|rt| *rt != RecordType::ANY);
        let owner = domain_name::canonicalize(&domain_name::join(subdomain, &apex))?;

        let mut removed = 0;
        self.store.update_zone(&apex, &mut |zone: &mut Zone| {
            removed = zone.remove_records(&owner, record_type)?;
            Ok(())
        })?;

        if removed > 0 {
            info!(
                zone = %apex,
                name = %owner,
                record_type = ?record_type,
                removed,
                "Records removed"
            );
            self.events.publish(ZoneEvent::new(
                apex,
                ZoneChange::RecordsRemoved {
                    name: Arc::from(owner),
                    record_type,
                    count: removed,
                },
            ));
        }

        Ok(removed)
    }
}
