use dnsforever_domain::{DomainError, RData, RecordRegistry, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

#[test]
fn test_construct_address_records() {
    let a = RecordRegistry::construct("A", &["192.0.2.10"]).unwrap();
    assert_eq!(a, RData::A(Ipv4Addr::new(192, 0, 2, 10)));

    let aaaa = RecordRegistry::construct("AAAA", &["2001:db8::1"]).unwrap();
    assert_eq!(aaaa, RData::AAAA("2001:db8::1".parse::<Ipv6Addr>().unwrap()));
}

#[test]
fn test_construct_tag_is_case_insensitive() {
    let data = RecordRegistry::construct("cname", &["Target.Example.com."]).unwrap();
    assert_eq!(data, RData::CNAME("target.example.com".into()));
}

#[test]
fn test_construct_mx_parses_preference_and_exchange() {
    let data = RecordRegistry::construct("MX", &["10", "mail.example.com"]).unwrap();
    match data {
        RData::MX {
            preference,
            exchange,
        } => {
            assert_eq!(preference, 10);
            assert_eq!(&*exchange, "mail.example.com");
        }
        other => panic!("expected MX, got {:?}", other),
    }
}

#[test]
fn test_construct_soa_reads_all_seven_fields() {
    let data = RecordRegistry::construct(
        "SOA",
        &[
            "ns1.example.com",
            "hostmaster.example.com",
            "2024010101",
            "7200",
            "900",
            "1209600",
            "300",
        ],
    )
    .unwrap();

    let soa = data.as_soa().unwrap();
    assert_eq!(&*soa.mname, "ns1.example.com");
    assert_eq!(soa.serial, 2024010101);
    assert_eq!(soa.minimum, 300);
}

#[test]
fn test_construct_txt_keeps_strings_verbatim() {
    let data = RecordRegistry::construct("TXT", &["v=spf1 -all", " padded "]).unwrap();
    assert_eq!(
        data,
        RData::TXT(vec!["v=spf1 -all".to_string(), " padded ".to_string()])
    );
}

#[test]
fn test_construct_srv() {
    let data = RecordRegistry::construct("SRV", &["0", "5", "5060", "sip.example.com"]).unwrap();
    assert_eq!(data.record_type(), RecordType::SRV);
}

#[test]
fn test_unknown_tag_is_unsupported() {
    let err = RecordRegistry::construct("BOGUS", &["x"]).unwrap_err();
    assert_eq!(err, DomainError::UnsupportedRecordType("BOGUS".to_string()));
}

#[test]
fn test_known_type_without_constructor_is_unsupported() {
    assert!(matches!(
        RecordRegistry::construct("NAPTR", &["x"]),
        Err(DomainError::UnsupportedRecordType(_))
    ));
    assert!(matches!(
        RecordRegistry::construct("ANY", &["x"]),
        Err(DomainError::UnsupportedRecordType(_))
    ));
    assert!(!RecordRegistry::supports(RecordType::CAA));
}

#[test]
fn test_query_only_types_parse_but_cannot_be_built() {
    for tag in ["HINFO", "NAPTR", "DNAME", "DS", "RRSIG", "NSEC", "DNSKEY", "CAA"] {
        let record_type: RecordType = tag.parse().unwrap();
        assert!(!RecordRegistry::supports(record_type), "{} has a constructor", tag);
    }

    let mut buildable: Vec<RecordType> = RecordRegistry::supported_types().collect();
    buildable.sort_by_key(|rt| rt.to_u16());
    assert_eq!(
        buildable,
        vec![
            RecordType::A,
            RecordType::NS,
            RecordType::CNAME,
            RecordType::SOA,
            RecordType::PTR,
            RecordType::MX,
            RecordType::TXT,
            RecordType::AAAA,
            RecordType::SRV,
        ]
    );
}

#[test]
fn test_malformed_data_is_invalid() {
    let err = RecordRegistry::construct("A", &["not-an-ip"]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidRecordData {
            record_type: RecordType::A,
            ..
        }
    ));

    assert!(matches!(
        RecordRegistry::construct("MX", &["mail.example.com"]),
        Err(DomainError::InvalidRecordData { .. })
    ));
    assert!(matches!(
        RecordRegistry::construct("MX", &["high", "mail.example.com"]),
        Err(DomainError::InvalidRecordData { .. })
    ));
    assert!(matches!(
        RecordRegistry::construct("NS", &["bad name!"]),
        Err(DomainError::InvalidRecordData { .. })
    ));
    assert!(matches!(
        RecordRegistry::construct::<&str>("TXT", &[]),
        Err(DomainError::InvalidRecordData { .. })
    ));
}

#[test]
fn test_txt_string_longer_than_255_bytes_is_rejected() {
    let long = "x".repeat(256);
    assert!(matches!(
        RecordRegistry::construct("TXT", &[long]),
        Err(DomainError::InvalidRecordData { .. })
    ));
}

#[test]
fn test_supported_types_all_construct() {
    let supported: Vec<RecordType> = RecordRegistry::supported_types().collect();
    assert_eq!(supported.len(), 9);
    assert!(supported.iter().all(|rt| RecordRegistry::supports(*rt)));
    assert!(!supported.contains(&RecordType::ANY));
}
