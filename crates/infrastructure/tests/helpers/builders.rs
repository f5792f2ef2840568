#![allow(dead_code)]
use dnsforever_domain::{
    RecordClass, RecordType, ResourceRecord, Zone, ZoneChange, ZoneEvent,
};

pub fn soa_record(apex: &str, serial: u32) -> ResourceRecord {
    let serial = serial.to_string();
    ResourceRecord::from_raw(
        apex,
        RecordClass::IN,
        3600,
        "SOA",
        &[
            format!("ns1.{}", apex).as_str(),
            format!("hostmaster.{}", apex).as_str(),
            serial.as_str(),
            "7200",
            "900",
            "1209600",
            "300",
        ],
    )
    .unwrap()
}

pub fn a_record(name: &str, addr: &str) -> ResourceRecord {
    ResourceRecord::from_raw(name, RecordClass::IN, 300, "A", &[addr]).unwrap()
}

pub fn zone(apex: &str) -> Zone {
    Zone::new(apex, soa_record(apex, 1)).unwrap()
}

pub fn zone_with(apex: &str, records: &[(&str, &str)]) -> Zone {
    let mut zone = zone(apex);
    for (name, addr) in records {
        zone.add_record(a_record(name, addr)).unwrap();
    }
    zone
}

pub fn record_added(zone: &str, name: &str, record_type: RecordType) -> ZoneEvent {
    ZoneEvent::new(
        zone,
        ZoneChange::RecordAdded {
            name: name.into(),
            record_type,
            ttl: 300,
        },
    )
}

pub fn zone_created(zone: &str) -> ZoneEvent {
    ZoneEvent::new(zone, ZoneChange::ZoneCreated { serial: 1 })
}
