//! Static table from record-type tag to rdata constructor.
//!
//! Supporting a new record kind means adding a row to `CONSTRUCTORS`.
//! Tags that parse as a [`RecordType`] but have no row are rejected the
//! same way as unknown tags.
use super::rdata::{RData, Soa};
use super::RecordType;
use crate::domain_name;
use crate::errors::DomainError;
use std::str::FromStr;
use std::sync::Arc;

type Constructor = fn(&[&str]) -> Result<RData, String>;

static CONSTRUCTORS: [(RecordType, Constructor); 9] = [
    (RecordType::A, build_a as Constructor),
    (RecordType::AAAA, build_aaaa as Constructor),
    (RecordType::NS, build_ns as Constructor),
    (RecordType::CNAME, build_cname as Constructor),
    (RecordType::PTR, build_ptr as Constructor),
    (RecordType::MX, build_mx as Constructor),
    (RecordType::TXT, build_txt as Constructor),
    (RecordType::SOA, build_soa as Constructor),
    (RecordType::SRV, build_srv as Constructor),
];

pub struct RecordRegistry;

impl RecordRegistry {
    /// Builds typed record data from a type tag such as `"MX"` and its raw
    /// presentation-format arguments.
    pub fn construct<S: AsRef<str>>(tag: &str, raw: &[S]) -> Result<RData, DomainError> {
        let record_type = RecordType::from_str(tag)
            .map_err(|_| DomainError::UnsupportedRecordType(tag.to_string()))?;
        Self::construct_typed(record_type, raw)
    }

    pub fn construct_typed<S: AsRef<str>>(
        record_type: RecordType,
        raw: &[S],
    ) -> Result<RData, DomainError> {
        let constructor = Self::constructor(record_type)
            .ok_or_else(|| DomainError::UnsupportedRecordType(record_type.to_string()))?;
        let args: Vec<&str> = raw.iter().map(|s| s.as_ref()).collect();
        constructor(&args).map_err(|reason| DomainError::InvalidRecordData {
            record_type,
            reason,
        })
    }

    pub fn supports(record_type: RecordType) -> bool {
        Self::constructor(record_type).is_some()
    }

    pub fn supported_types() -> impl Iterator<Item = RecordType> {
        CONSTRUCTORS.iter().map(|(record_type, _)| *record_type)
    }

    fn constructor(record_type: RecordType) -> Option<Constructor> {
        CONSTRUCTORS
            .iter()
            .find(|(rt, _)| *rt == record_type)
            .map(|(_, constructor)| *constructor)
    }
}

fn expect_args(args: &[&str], count: usize) -> Result<(), String> {
    if args.len() != count {
        return Err(format!("expected {} field(s), got {}", count, args.len()));
    }
    Ok(())
}

fn parse_name(field: &str) -> Result<Arc<str>, String> {
    domain_name::canonicalize(field)
        .map(Arc::from)
        .map_err(|e| e.to_string())
}

fn parse_number<T: FromStr>(field: &str, what: &str) -> Result<T, String> {
    field
        .parse::<T>()
        .map_err(|_| format!("invalid {}: {:?}", what, field))
}

fn build_a(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 1)?;
    args[0]
        .parse()
        .map(RData::A)
        .map_err(|_| format!("invalid IPv4 address: {:?}", args[0]))
}

fn build_aaaa(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 1)?;
    args[0]
        .parse()
        .map(RData::AAAA)
        .map_err(|_| format!("invalid IPv6 address: {:?}", args[0]))
}

fn build_ns(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 1)?;
    parse_name(args[0]).map(RData::NS)
}

fn build_cname(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 1)?;
    parse_name(args[0]).map(RData::CNAME)
}

fn build_ptr(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 1)?;
    parse_name(args[0]).map(RData::PTR)
}

fn build_mx(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 2)?;
    Ok(RData::MX {
        preference: parse_number(args[0], "preference")?,
        exchange: parse_name(args[1])?,
    })
}

fn build_txt(args: &[&str]) -> Result<RData, String> {
    if args.is_empty() {
        return Err("expected at least one character-string".to_string());
    }
    if let Some(long) = args.iter().find(|s| s.len() > 255) {
        return Err(format!(
            "character-string of {} bytes exceeds 255",
            long.len()
        ));
    }
    Ok(RData::TXT(args.iter().map(|s| s.to_string()).collect()))
}

fn build_soa(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 7)?;
    Ok(RData::SOA(Soa {
        mname: parse_name(args[0])?,
        rname: parse_name(args[1])?,
        serial: parse_number(args[2], "serial")?,
        refresh: parse_number(args[3], "refresh")?,
        retry: parse_number(args[4], "retry")?,
        expire: parse_number(args[5], "expire")?,
        minimum: parse_number(args[6], "minimum")?,
    }))
}

fn build_srv(args: &[&str]) -> Result<RData, String> {
    expect_args(args, 4)?;
    Ok(RData::SRV {
        priority: parse_number(args[0], "priority")?,
        weight: parse_number(args[1], "weight")?,
        port: parse_number(args[2], "port")?,
        target: parse_name(args[3])?,
    })
}
