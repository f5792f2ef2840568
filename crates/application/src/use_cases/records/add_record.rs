use dnsforever_domain::{
    domain_name, DomainError, RecordClass, ResourceRecord, Zone, ZoneChange, ZoneEvent,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{ZoneEventSink, ZoneStore};

/// One record of a batch handed to [`AddRecordUseCase::execute_batch`],
/// with the same fields `execute` takes one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInput {
    pub subdomain: String,
    pub ttl: u32,
    pub type_tag: String,
    pub record_class: String,
    pub raw_data: Vec<String>,
}

impl RecordInput {
    pub fn new<S: AsRef<str>>(
        subdomain: &str,
        ttl: u32,
        type_tag: &str,
        record_class: &str,
        raw_data: &[S],
    ) -> Self {
        Self {
            subdomain: subdomain.to_string(),
            ttl,
            type_tag: type_tag.to_string(),
            record_class: record_class.to_string(),
            raw_data: raw_data.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

pub struct AddRecordUseCase {
    store: Arc<dyn ZoneStore>,
    events: Arc<dyn ZoneEventSink>,
}

impl AddRecordUseCase {
    pub fn new(store: Arc<dyn ZoneStore>, events: Arc<dyn ZoneEventSink>) -> Self {
        Self { store, events }
    }

    /// Appends a record owned by `subdomain.zone_apex` (or the apex itself
    /// for `""`/`"@"`) to an existing zone.
    ///
    /// The record is fully built through the record registry before the
    /// store is touched, so any rejection leaves the store unchanged.
    #[instrument(skip(self, raw_data))]
    pub fn execute<S: AsRef<str>>(
        &self,
        zone_apex: &str,
        ttl: u32,
        type_tag: &str,
        subdomain: &str,
        record_class: &str,
        raw_data: &[S],
    ) -> Result<Arc<ResourceRecord>, DomainError> {
        let apex = domain_name::canonicalize(zone_apex)?;
        let record = build_record(&apex, ttl, type_tag, subdomain, record_class, raw_data)?;

        let mut added = None;
        self.store.update_zone(&apex, &mut |zone: &mut Zone| {
            added = Some(zone.add_record(record.clone())?);
            Ok(())
        })?;
        let added = added.ok_or_else(|| DomainError::ZoneNotFound(apex.clone()))?;

        info!(
            zone = %apex,
            name = %added.name(),
            record_type = %added.record_type(),
            ttl = added.ttl(),
            rdata = %added.data(),
            "Record added"
        );
        self.publish_added(&apex, &added);

        Ok(added)
    }

    /// Appends every record of `records` to an existing zone in one
    /// published update. This is the loader path: the zone is copied once
    /// per batch rather than once per record.
    ///
    /// All-or-nothing: the whole batch is built before the store is
    /// touched, and a record the zone rejects discards the batch.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn execute_batch(
        &self,
        zone_apex: &str,
        records: &[RecordInput],
    ) -> Result<Vec<Arc<ResourceRecord>>, DomainError> {
        let apex = domain_name::canonicalize(zone_apex)?;
        let built = records
            .iter()
            .map(|input| {
                build_record(
                    &apex,
                    input.ttl,
                    &input.type_tag,
                    &input.subdomain,
                    &input.record_class,
                    &input.raw_data,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut added = Vec::with_capacity(built.len());
        self.store.update_zone(&apex, &mut |zone: &mut Zone| {
            added.clear();
            for record in &built {
                added.push(zone.add_record(record.clone())?);
            }
            Ok(())
        })?;

        info!(zone = %apex, records = added.len(), "Records loaded");
        for record in &added {
            self.publish_added(&apex, record);
        }

        Ok(added)
    }

    fn publish_added(&self, apex: &str, record: &ResourceRecord) {
        self.events.publish(ZoneEvent::new(
            apex,
            ZoneChange::RecordAdded {
                name: record.shared_name(),
                record_type: record.record_type(),
                ttl: record.ttl(),
            },
        ));
    }
}

fn build_record<S: AsRef<str>>(
    apex: &str,
    ttl: u32,
    type_tag: &str,
    subdomain: &str,
    record_class: &str,
    raw_data: &[S],
) -> Result<ResourceRecord, DomainError> {
    let class = RecordClass::from_str(record_class)
        .map_err(|_| DomainError::InvalidRecordClass(record_class.to_string()))?;
    let owner = domain_name::join(subdomain, apex);

    ResourceRecord::from_raw(&owner, class, ttl, type_tag, raw_data)
        .inspect_err(|e| warn!(zone = %apex, owner = %owner, error = %e, "Record rejected"))
}
