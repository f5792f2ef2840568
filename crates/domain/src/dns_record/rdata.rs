use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Start-of-authority data. `minimum` doubles as the negative-caching TTL
/// (RFC 2308 section 4).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Soa {
    pub mname: Arc<str>,
    pub rname: Arc<str>,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(Arc<str>),
    CNAME(Arc<str>),
    PTR(Arc<str>),
    MX {
        preference: u16,
        exchange: Arc<str>,
    },
    TXT(Vec<String>),
    SOA(Soa),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Arc<str>,
    },
}

impl RData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RData::A(_) => RecordType::A,
            RData::AAAA(_) => RecordType::AAAA,
            RData::NS(_) => RecordType::NS,
            RData::CNAME(_) => RecordType::CNAME,
            RData::PTR(_) => RecordType::PTR,
            RData::MX { .. } => RecordType::MX,
            RData::TXT(_) => RecordType::TXT,
            RData::SOA(_) => RecordType::SOA,
            RData::SRV { .. } => RecordType::SRV,
        }
    }

    /// Name this record points at, for the types that drive
    /// additional-section processing (CNAME, MX, NS).
    pub fn additional_target(&self) -> Option<&str> {
        match self {
            RData::NS(name) | RData::CNAME(name) => Some(name),
            RData::MX { exchange, .. } => Some(exchange),
            _ => None,
        }
    }

    pub fn as_soa(&self) -> Option<&Soa> {
        match self {
            RData::SOA(soa) => Some(soa),
            _ => None,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::AAAA(addr) => write!(f, "{}", addr),
            RData::NS(name) | RData::CNAME(name) | RData::PTR(name) => write!(f, "{}.", name),
            RData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}.", preference, exchange),
            RData::TXT(strings) => {
                let quoted: Vec<String> = strings.iter().map(|s| format!("{:?}", s)).collect();
                write!(f, "{}", quoted.join(" "))
            }
            RData::SOA(soa) => write!(
                f,
                "{}. {}. {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RData::SRV {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{} {} {} {}.", priority, weight, port, target),
        }
    }
}
