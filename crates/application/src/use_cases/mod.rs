pub mod dns;
pub mod local_records;

pub use dns::{LocalAnswer, LocalDecision, ResolveLocalQueryUseCase};
pub use local_records::{LoadLocalRecordsUseCase, LoadSummary};
