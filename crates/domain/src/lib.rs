//! dnsforever domain layer: records, zones and the resolution result types.
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod resolution;
pub mod zone;
pub mod zone_event;

pub use config::{Config, ConfigError, ConfigOverrides, EventsConfig, LogFormat, LoggingConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{
    RData, RecordClass, RecordHeader, RecordRegistry, RecordType, ResourceRecord, Soa,
};
pub use errors::DomainError;
pub use resolution::Resolution;
pub use zone::Zone;
pub use zone_event::{ZoneChange, ZoneEvent};
