mod load;

pub use load::{LoadLocalRecordsUseCase, LoadSummary};
