#![allow(dead_code)]
use dnsforever_domain::{RecordClass, ResourceRecord, Zone};

pub fn soa_record(apex: &str) -> ResourceRecord {
    soa_record_with_serial(apex, 2024010101)
}

pub fn soa_record_with_serial(apex: &str, serial: u32) -> ResourceRecord {
    let mname = format!("ns1.{}", apex);
    let rname = format!("hostmaster.{}", apex);
    let serial = serial.to_string();
    ResourceRecord::from_raw(
        apex,
        RecordClass::IN,
        3600,
        "SOA",
        &[
            mname.as_str(),
            rname.as_str(),
            serial.as_str(),
            "7200",
            "900",
            "1209600",
            "300",
        ],
    )
    .unwrap()
}

/// Builds a zone record by record, the way a zone loader would.
pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new(apex: &str) -> Self {
        Self {
            zone: Zone::new(apex, soa_record(apex)).unwrap(),
        }
    }

    pub fn record(self, label: &str, type_tag: &str, raw: &[&str]) -> Self {
        self.record_in(label, RecordClass::IN, 300, type_tag, raw)
    }

    pub fn record_in(
        mut self,
        label: &str,
        class: RecordClass,
        ttl: u32,
        type_tag: &str,
        raw: &[&str],
    ) -> Self {
        let owner = dnsforever_domain::domain_name::join(label, self.zone.apex());
        let record = ResourceRecord::from_raw(&owner, class, ttl, type_tag, raw).unwrap();
        self.zone.add_record(record).unwrap();
        self
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}
