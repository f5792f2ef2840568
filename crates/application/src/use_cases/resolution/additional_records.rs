use dnsforever_domain::{RecordHeader, ResourceRecord};
use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::ports::ZoneStore;

/// Derives additional-section glue (RFC 1034 4.3.2 step 6).
///
/// For every CNAME, MX or NS record already chosen for the answer or
/// authority section, the name it points at is looked up afresh through
/// [`ZoneStore::find_zone`] (it may live in another zone) and its A/AAAA
/// records are yielded, marked authoritative. Records already chosen, or
/// already yielded, are skipped. Nothing here can fail the query: a target
/// this server knows nothing about simply contributes no glue.
pub struct AdditionalSectionProcessor {
    store: Arc<dyn ZoneStore>,
}

impl AdditionalSectionProcessor {
    pub fn new(store: Arc<dyn ZoneStore>) -> Self {
        Self { store }
    }

    pub fn records<'a>(
        &'a self,
        answer: &'a [RecordHeader],
        authority: &'a [RecordHeader],
    ) -> impl Iterator<Item = RecordHeader> + 'a {
        let mut seen: FxHashSet<Arc<ResourceRecord>> = answer
            .iter()
            .chain(authority)
            .map(|header| Arc::clone(&header.record))
            .collect();

        answer
            .iter()
            .chain(authority)
            .filter(|header| header.record_type().triggers_additional())
            .filter_map(|header| header.record.data().additional_target())
            .flat_map(move |target| self.address_records(target))
            .filter(move |record| seen.insert(Arc::clone(record)))
            .map(RecordHeader::authoritative)
    }

    fn address_records(&self, target: &str) -> Vec<Arc<ResourceRecord>> {
        let Some(zone) = self.store.find_zone(target) else {
            return Vec::new();
        };
        zone.records(target)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.record_type().is_address())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
