mod create_zone;
mod delete_zone;

pub use create_zone::CreateZoneUseCase;
pub use delete_zone::DeleteZoneUseCase;
