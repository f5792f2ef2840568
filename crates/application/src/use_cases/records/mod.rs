mod add_record;
mod remove_records;

pub use add_record::{AddRecordUseCase, RecordInput};
pub use remove_records::RemoveRecordsUseCase;
