pub mod ports;
pub mod use_cases;

pub use ports::RecordStore;
pub use use_cases::{
    LoadLocalRecordsUseCase, LoadSummary, LocalAnswer, LocalDecision, ResolveLocalQueryUseCase,
};
