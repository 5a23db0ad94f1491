//! @ai:module:intent Submission sources and comparison execution
//! @ai:module:layer infrastructure
//! @ai:module:public_api SubmissionSource, CodeforcesClient, OfflineSource, MockSubmissionSource, ComparisonExecutor

pub mod client;
pub mod executor;

pub use client::{CodeforcesClient, MockSubmissionSource, OfflineSource, SubmissionSource};
pub use executor::{validate_handles, ComparisonExecutor};
