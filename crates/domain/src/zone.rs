use crate::dns_record::{RecordType, ResourceRecord};
use crate::domain_name;
use crate::errors::DomainError;
use std::collections::HashMap;
use std::sync::Arc;

/// An authoritative zone: the records of every name at or below `apex`
/// that this server answers for, plus the zone's single SOA.
///
/// The apex entry always exists and always holds the SOA.
#[derive(Debug, Clone)]
pub struct Zone {
    apex: Arc<str>,
    soa: Arc<ResourceRecord>,
    entries: HashMap<Arc<str>, Vec<Arc<ResourceRecord>>>,
}

impl Zone {
    pub fn new(apex: &str, soa: ResourceRecord) -> Result<Self, DomainError> {
        let apex: Arc<str> = Arc::from(domain_name::canonicalize(apex)?);

        if soa.record_type() != RecordType::SOA || soa.name() != &*apex {
            return Err(DomainError::MissingSoa(apex.to_string()));
        }

        let soa = Arc::new(soa);
        let mut entries = HashMap::new();
        entries.insert(Arc::clone(&apex), vec![Arc::clone(&soa)]);

        Ok(Self { apex, soa, entries })
    }

    pub fn apex(&self) -> &str {
        &self.apex
    }

    pub fn shared_apex(&self) -> Arc<str> {
        Arc::clone(&self.apex)
    }

    pub fn soa(&self) -> &Arc<ResourceRecord> {
        &self.soa
    }

    pub fn serial(&self) -> u32 {
        self.soa.data().as_soa().map(|soa| soa.serial).unwrap_or(0)
    }

    pub fn is_apex(&self, name: &str) -> bool {
        name == &*self.apex
    }

    /// Records owned by `name`, in insertion order. `name` must be
    /// normalized.
    pub fn records(&self, name: &str) -> Option<&[Arc<ResourceRecord>]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|name| &**name)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Appends `record` to its owner's record list.
    ///
    /// An SOA at the apex replaces the zone's SOA in place; an SOA anywhere
    /// else is rejected.
    pub fn add_record(
        &mut self,
        record: ResourceRecord,
    ) -> Result<Arc<ResourceRecord>, DomainError> {
        if !domain_name::is_within(record.name(), &self.apex) {
            return Err(DomainError::OutOfZone {
                name: record.name().to_string(),
                zone: self.apex.to_string(),
            });
        }

        if record.record_type() == RecordType::SOA {
            return self.replace_soa(record);
        }

        let record = Arc::new(record);
        self.entries
            .entry(record.shared_name())
            .or_default()
            .push(Arc::clone(&record));
        Ok(record)
    }

    /// Removes the records of `record_type` (or every type when `None` or
    /// `ANY`) owned by `name` and returns how many were dropped. A name left
    /// without records disappears from the zone.
    pub fn remove_records(
        &mut self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<usize, DomainError> {
        if record_type == Some(RecordType::SOA) {
            return Err(DomainError::ProtectedRecord(format!(
                "the SOA of {} cannot be removed",
                self.apex
            )));
        }

        let record_type = record_type.filter(|rt| *rt != RecordType::ANY);
        let Some(records) = self.entries.get_mut(name) else {
            return Ok(0);
        };

        let before = records.len();
        records.retain(|record| {
            let rt = record.record_type();
            rt == RecordType::SOA || record_type.is_some_and(|wanted| wanted != rt)
        });
        let removed = before - records.len();

        if records.is_empty() {
            self.entries.remove(name);
        }
        Ok(removed)
    }

    fn replace_soa(&mut self, record: ResourceRecord) -> Result<Arc<ResourceRecord>, DomainError> {
        if record.name() != &*self.apex {
            return Err(DomainError::InvalidRecordData {
                record_type: RecordType::SOA,
                reason: format!("SOA for {} must be owned by the apex", self.apex),
            });
        }

        let soa = Arc::new(record);
        if let Some(records) = self.entries.get_mut(&*self.apex) {
            for slot in records.iter_mut() {
                if slot.record_type() == RecordType::SOA {
                    *slot = Arc::clone(&soa);
                }
            }
        }
        self.soa = Arc::clone(&soa);
        Ok(soa)
    }
}
