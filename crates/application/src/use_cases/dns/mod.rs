mod resolve_local_query;

pub use resolve_local_query::{LocalAnswer, LocalDecision, ResolveLocalQueryUseCase};
