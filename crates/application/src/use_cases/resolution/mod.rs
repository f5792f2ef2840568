mod additional_records;
mod resolve_query;

pub use additional_records::AdditionalSectionProcessor;
pub use resolve_query::ResolveQueryUseCase;
