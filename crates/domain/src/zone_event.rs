use super::RecordType;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZoneChange {
    ZoneCreated {
        serial: u32,
    },
    ZoneReplaced {
        serial: u32,
    },
    ZoneDeleted {
        records: usize,
    },
    RecordAdded {
        name: Arc<str>,
        record_type: RecordType,
        ttl: u32,
    },
    RecordsRemoved {
        name: Arc<str>,
        record_type: Option<RecordType>,
        count: usize,
    },
}

/// Structured notification of one administration action on the store.
/// Serializes flat: `{"zone": .., "kind": "record_added", .., "occurred_at": ..}`.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneEvent {
    pub zone: Arc<str>,

    #[serde(flatten)]
    pub change: ZoneChange,

    pub occurred_at: DateTime<Utc>,
}

impl ZoneEvent {
    pub fn new(zone: impl Into<Arc<str>>, change: ZoneChange) -> Self {
        Self {
            zone: zone.into(),
            change,
            occurred_at: Utc::now(),
        }
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn kind(&self) -> &'static str {
        match self.change {
            ZoneChange::ZoneCreated { .. } => "zone_created",
            ZoneChange::ZoneReplaced { .. } => "zone_replaced",
            ZoneChange::ZoneDeleted { .. } => "zone_deleted",
            ZoneChange::RecordAdded { .. } => "record_added",
            ZoneChange::RecordsRemoved { .. } => "records_removed",
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        match self.change {
            ZoneChange::RecordAdded { record_type, .. } => Some(record_type),
            ZoneChange::RecordsRemoved { record_type, .. } => record_type,
            _ => None,
        }
    }
}
