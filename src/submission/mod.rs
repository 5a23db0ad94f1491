//! @ai:module:intent Submission data model and dump loading
//! @ai:module:layer domain
//! @ai:module:public_api SubmissionRecord, Problem, StatusResponse, SubmissionLoader

pub mod loader;
pub mod record;

pub use loader::{DumpEntry, SubmissionLoader};
pub use record::{Problem, StatusResponse, SubmissionRecord, ACCEPTED_VERDICT, STATUS_OK};
