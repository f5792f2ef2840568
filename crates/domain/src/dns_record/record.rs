use super::{RData, RecordClass, RecordRegistry, RecordType};
use crate::domain_name;
use crate::errors::DomainError;
use std::fmt;
use std::sync::Arc;

/// A single resource record. Owner name, class and data are fixed at
/// construction; the TTL can be chosen with [`ResourceRecord::with_ttl`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    name: Arc<str>,
    class: RecordClass,
    ttl: u32,
    data: RData,
}

impl ResourceRecord {
    pub fn new(name: &str, class: RecordClass, ttl: u32, data: RData) -> Self {
        Self {
            name: Arc::from(domain_name::normalize(name)),
            class,
            ttl,
            data,
        }
    }

    /// Builds a record through the [`RecordRegistry`] from a type tag and
    /// raw presentation-format fields.
    pub fn from_raw<S: AsRef<str>>(
        name: &str,
        class: RecordClass,
        ttl: u32,
        type_tag: &str,
        raw: &[S],
    ) -> Result<Self, DomainError> {
        let owner = domain_name::canonicalize(name)?;
        let data = RecordRegistry::construct(type_tag, raw)?;
        Ok(Self::new(&owner, class, ttl, data))
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn class(&self) -> RecordClass {
        self.class
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn data(&self) -> &RData {
        &self.data
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {} {}",
            self.name,
            self.ttl,
            self.class,
            self.record_type(),
            self.data
        )
    }
}

/// A record placed in one section of a response, together with the
/// authoritative-answer marking it carries there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordHeader {
    pub record: Arc<ResourceRecord>,
    pub authoritative: bool,
}

impl RecordHeader {
    pub fn authoritative(record: Arc<ResourceRecord>) -> Self {
        Self {
            record,
            authoritative: true,
        }
    }

    pub fn non_authoritative(record: Arc<ResourceRecord>) -> Self {
        Self {
            record,
            authoritative: false,
        }
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn record_type(&self) -> RecordType {
        self.record.record_type()
    }

    pub fn ttl(&self) -> u32 {
        self.record.ttl()
    }
}
