//! @ai:module:intent Per-user metrics and their aggregation
//! @ai:module:layer application
//! @ai:module:public_api UserMetrics, Rating, UserOutcome, MetricsAggregator

pub mod aggregator;
pub mod language;
pub mod types;

pub use aggregator::{MetricsAggregator, MetricsAggregatorTrait};
pub use language::{normalize_language, parse_language_usage, render_usage};
pub use types::{Rating, UserMetrics, UserOutcome};
