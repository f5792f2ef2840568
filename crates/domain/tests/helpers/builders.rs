#![allow(dead_code)]
use dnsforever_domain::{RData, RecordClass, ResourceRecord, Soa};
use std::sync::Arc;

pub fn soa_record(apex: &str, serial: u32) -> ResourceRecord {
    ResourceRecord::new(
        apex,
        RecordClass::IN,
        3600,
        RData::SOA(Soa {
            mname: Arc::from(format!("ns1.{}", apex)),
            rname: Arc::from(format!("hostmaster.{}", apex)),
            serial,
            refresh: 7200,
            retry: 900,
            expire: 1_209_600,
            minimum: 300,
        }),
    )
}

pub struct RecordBuilder {
    name: String,
    class: RecordClass,
    ttl: u32,
    data: RData,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            class: RecordClass::IN,
            ttl: 300,
            data: RData::A("192.0.2.1".parse().unwrap()),
        }
    }

    pub fn a(mut self, addr: &str) -> Self {
        self.data = RData::A(addr.parse().unwrap());
        self
    }

    pub fn aaaa(mut self, addr: &str) -> Self {
        self.data = RData::AAAA(addr.parse().unwrap());
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.data = RData::NS(Arc::from(target));
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.data = RData::CNAME(Arc::from(target));
        self
    }

    pub fn mx(mut self, preference: u16, exchange: &str) -> Self {
        self.data = RData::MX {
            preference,
            exchange: Arc::from(exchange),
        };
        self
    }

    pub fn class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(&self.name, self.class, self.ttl, self.data)
    }
}
