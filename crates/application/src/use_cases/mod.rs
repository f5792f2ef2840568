pub mod records;
pub mod resolution;
pub mod zones;

pub use records::{AddRecordUseCase, RecordInput, RemoveRecordsUseCase};
pub use resolution::{AdditionalSectionProcessor, ResolveQueryUseCase};
pub use zones::{CreateZoneUseCase, DeleteZoneUseCase};
