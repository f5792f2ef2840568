//! Authoritative DNS zone resolution engine.
//!
//! [`Authority`] wires the in-memory zone store, the event sinks and the
//! resolution and administration use cases together. It answers queries
//! with `(answer, authority, additional)` record sections and never touches
//! the wire: parsing questions and encoding responses belong to the caller.
//!
//! ```no_run
//! use dnsforever::{Authority, Config, RecordClass, RecordType, ResourceRecord};
//!
//! # fn main() -> Result<(), dnsforever::DomainError> {
//! let authority = Authority::new(&Config::default());
//! let soa = ResourceRecord::from_raw(
//!     "example.com",
//!     RecordClass::IN,
//!     3600,
//!     "SOA",
//!     &["ns1.example.com", "hostmaster.example.com", "1", "7200", "900", "1209600", "300"],
//! )?;
//! authority.create_zone("example.com", soa)?;
//! authority.add_record("example.com", 300, "A", "www", "IN", &["192.0.2.1"])?;
//!
//! let resolution = authority.resolve("WWW.example.com", RecordClass::IN, RecordType::A)?;
//! assert_eq!(resolution.answer.len(), 1);
//! # Ok(())
//! # }
//! ```
mod authority;
pub mod bootstrap;
mod sinks;

pub use authority::Authority;
pub use sinks::EventSinks;

pub use dnsforever_domain::{
    Config, ConfigError, ConfigOverrides, DnsQuery, DomainError, LogFormat, RData, RecordClass,
    RecordHeader, RecordType, ResourceRecord, Resolution, Soa, Zone, ZoneChange, ZoneEvent,
};
pub use dnsforever_application::use_cases::RecordInput;
pub use dnsforever_infrastructure::ZoneMetrics;
