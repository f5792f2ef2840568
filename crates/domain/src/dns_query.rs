use super::{DomainError, RecordClass, RecordType};
use std::sync::Arc;

/// One already-parsed question: name, class and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub class: RecordClass,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            class: RecordClass::IN,
            record_type,
        }
    }

    pub fn with_class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    /// Builds a query from the numeric QCLASS/QTYPE codes a message parser
    /// hands over.
    pub fn from_codes(
        domain: impl Into<Arc<str>>,
        class: u16,
        record_type: u16,
    ) -> Result<Self, DomainError> {
        let class = RecordClass::from_u16(class)
            .ok_or_else(|| DomainError::InvalidRecordClass(class.to_string()))?;
        let record_type = RecordType::from_u16(record_type)
            .ok_or_else(|| DomainError::UnsupportedRecordType(record_type.to_string()))?;
        Ok(Self::new(domain, record_type).with_class(class))
    }
}
