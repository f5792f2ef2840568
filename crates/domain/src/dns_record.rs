pub mod rdata;
pub mod record;
pub mod record_class;
pub mod record_type;
pub mod registry;

pub use rdata::{RData, Soa};
pub use record::{RecordHeader, ResourceRecord};
pub use record_class::RecordClass;
pub use record_type::RecordType;
pub use registry::RecordRegistry;
