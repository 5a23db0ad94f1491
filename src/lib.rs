//! @ai:module:intent Codeforces user comparison library
//! @ai:module:layer application
//! @ai:module:public_api config, error, submission, runner, metrics, report

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod submission;

pub use config::CompareConfig;
pub use error::{Error, FetchError, Result};
pub use metrics::{MetricsAggregator, MetricsAggregatorTrait, Rating, UserMetrics, UserOutcome};
pub use report::{ComparisonReport, ReportGenerator, TableRenderer};
pub use runner::{
    CodeforcesClient, ComparisonExecutor, MockSubmissionSource, OfflineSource, SubmissionSource,
};
pub use submission::{SubmissionLoader, SubmissionRecord};
