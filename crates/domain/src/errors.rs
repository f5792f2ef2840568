use thiserror::Error;

use crate::dns_record::RecordType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No authority for {0}")]
    NoAuthority(String),

    #[error("Domain not found (NXDOMAIN): {0}")]
    AuthoritativeName(String),

    #[error("Record type {0:?} not supported")]
    UnsupportedRecordType(String),

    #[error("Invalid {record_type} record data: {reason}")]
    InvalidRecordData {
        record_type: RecordType,
        reason: String,
    },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record class: {0}")]
    InvalidRecordClass(String),

    #[error("Zone {0} requires an SOA record at its apex")]
    MissingSoa(String),

    #[error("{name} is outside of zone {zone}")]
    OutOfZone { name: String, zone: String },

    #[error("Zone already exists: {0}")]
    ZoneAlreadyExists(String),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Protected record: {0}")]
    ProtectedRecord(String),
}

impl DomainError {
    /// Response status a query frontend answers with when resolution fails
    /// with this error.
    pub fn response_status(&self) -> &'static str {
        match self {
            DomainError::NoAuthority(_) => "REFUSED",
            DomainError::AuthoritativeName(_) => "NXDOMAIN",
            _ => "SERVFAIL",
        }
    }

    pub fn is_nxdomain(&self) -> bool {
        matches!(self, DomainError::AuthoritativeName(_))
    }
}
