use dnsforever_domain::{DomainError, RecordClass, RecordType, ResourceRecord, Zone};

mod helpers;
use helpers::{soa_record, RecordBuilder};

fn example_zone() -> Zone {
    Zone::new("example.com", soa_record("example.com", 1)).unwrap()
}

#[test]
fn test_new_zone_holds_soa_at_apex() {
    let zone = example_zone();

    assert_eq!(zone.apex(), "example.com");
    assert_eq!(zone.serial(), 1);
    assert_eq!(zone.entry_count(), 1);
    assert_eq!(zone.record_count(), 1);

    let apex = zone.records("example.com").unwrap();
    assert_eq!(apex.len(), 1);
    assert_eq!(apex[0].record_type(), RecordType::SOA);
}

#[test]
fn test_new_zone_canonicalizes_apex() {
    let zone = Zone::new("Example.COM.", soa_record("example.com", 1)).unwrap();
    assert_eq!(zone.apex(), "example.com");
    assert!(zone.is_apex("example.com"));
}

#[test]
fn test_new_zone_requires_soa() {
    let not_soa = RecordBuilder::new("example.com").build();
    assert_eq!(
        Zone::new("example.com", not_soa).unwrap_err(),
        DomainError::MissingSoa("example.com".to_string())
    );

    let foreign_soa = soa_record("other.com", 1);
    assert!(matches!(
        Zone::new("example.com", foreign_soa),
        Err(DomainError::MissingSoa(_))
    ));
}

#[test]
fn test_new_zone_rejects_invalid_apex() {
    assert!(matches!(
        Zone::new("", soa_record("example.com", 1)),
        Err(DomainError::InvalidDomainName(_))
    ));
}

#[test]
fn test_add_record_preserves_insertion_order() {
    let mut zone = example_zone();
    zone.add_record(RecordBuilder::new("www.example.com").a("192.0.2.1").build())
        .unwrap();
    zone.add_record(RecordBuilder::new("www.example.com").a("192.0.2.2").build())
        .unwrap();
    zone.add_record(RecordBuilder::new("www.example.com").aaaa("2001:db8::1").build())
        .unwrap();

    let records = zone.records("www.example.com").unwrap();
    let data: Vec<String> = records.iter().map(|r| r.data().to_string()).collect();
    assert_eq!(data, vec!["192.0.2.1", "192.0.2.2", "2001:db8::1"]);
    assert_eq!(zone.record_count(), 4);
}

#[test]
fn test_add_record_outside_zone_is_rejected() {
    let mut zone = example_zone();
    let err = zone
        .add_record(RecordBuilder::new("www.badexample.com").build())
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::OutOfZone {
            name: "www.badexample.com".to_string(),
            zone: "example.com".to_string(),
        }
    );
    assert!(!zone.contains_name("www.badexample.com"));
}

#[test]
fn test_add_soa_at_apex_replaces_zone_soa() {
    let mut zone = example_zone();
    zone.add_record(soa_record("example.com", 2)).unwrap();

    assert_eq!(zone.serial(), 2);
    let apex = zone.records("example.com").unwrap();
    assert_eq!(apex.len(), 1);
    assert_eq!(apex[0].data().as_soa().unwrap().serial, 2);
}

#[test]
fn test_add_soa_below_apex_is_rejected() {
    let mut zone = example_zone();
    let soa = soa_record("example.com", 9);
    let below = ResourceRecord::new("sub.example.com", RecordClass::IN, 60, soa.data().clone());

    assert!(matches!(
        zone.add_record(below),
        Err(DomainError::InvalidRecordData {
            record_type: RecordType::SOA,
            ..
        })
    ));
    assert_eq!(zone.serial(), 1);
}

#[test]
fn test_remove_records_by_type() {
    let mut zone = example_zone();
    zone.add_record(RecordBuilder::new("www.example.com").a("192.0.2.1").build())
        .unwrap();
    zone.add_record(RecordBuilder::new("www.example.com").aaaa("2001:db8::1").build())
        .unwrap();

    let removed = zone
        .remove_records("www.example.com", Some(RecordType::A))
        .unwrap();

    assert_eq!(removed, 1);
    let left = zone.records("www.example.com").unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].record_type(), RecordType::AAAA);
}

#[test]
fn test_remove_all_records_drops_the_name() {
    let mut zone = example_zone();
    zone.add_record(RecordBuilder::new("www.example.com").build())
        .unwrap();

    assert_eq!(zone.remove_records("www.example.com", None).unwrap(), 1);
    assert!(!zone.contains_name("www.example.com"));
    assert_eq!(zone.remove_records("www.example.com", None).unwrap(), 0);
}

#[test]
fn test_remove_all_at_apex_keeps_soa() {
    let mut zone = example_zone();
    zone.add_record(RecordBuilder::new("example.com").ns("ns1.example.com").build())
        .unwrap();

    assert_eq!(zone.remove_records("example.com", None).unwrap(), 1);
    let apex = zone.records("example.com").unwrap();
    assert_eq!(apex.len(), 1);
    assert_eq!(apex[0].record_type(), RecordType::SOA);
}

#[test]
fn test_remove_any_type_removes_every_type() {
    let mut zone = example_zone();
    zone.add_record(RecordBuilder::new("www.example.com").a("192.0.2.1").build())
        .unwrap();
    zone.add_record(RecordBuilder::new("www.example.com").aaaa("2001:db8::1").build())
        .unwrap();

    let removed = zone
        .remove_records("www.example.com", Some(RecordType::ANY))
        .unwrap();

    assert_eq!(removed, 2);
    assert!(!zone.contains_name("www.example.com"));
}

#[test]
fn test_remove_soa_is_protected() {
    let mut zone = example_zone();
    assert!(matches!(
        zone.remove_records("example.com", Some(RecordType::SOA)),
        Err(DomainError::ProtectedRecord(_))
    ));
    assert_eq!(zone.record_count(), 1);
}

#[test]
fn test_cloned_zone_is_independent() {
    let zone = example_zone();
    let mut copy = zone.clone();
    copy.add_record(RecordBuilder::new("www.example.com").build())
        .unwrap();

    assert!(copy.contains_name("www.example.com"));
    assert!(!zone.contains_name("www.example.com"));
}
