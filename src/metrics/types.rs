//! @ai:module:intent Metric types produced for each compared user
//! @ai:module:layer domain
//! @ai:module:public_api UserMetrics, Rating, UserOutcome
//! @ai:module:stateless true

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// @ai:intent Maximum problem rating, exact or derived from the fallback average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Exact(u32),
    Estimated(f64),
}

impl Rating {
    /// @ai:intent Numeric value for comparisons
    /// @ai:effects pure
    pub fn as_f64(&self) -> f64 {
        match self {
            Rating::Exact(r) => *r as f64,
            Rating::Estimated(r) => *r,
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::Exact(0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Exact(r) => write!(f, "{}", r),
            Rating::Estimated(r) => write!(f, "{:.1}", r),
        }
    }
}

/// @ai:intent Summary statistics for one user, serialized in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    #[serde(rename = "User")]
    pub handle: String,
    #[serde(rename = "Total Solved")]
    pub total_solved: usize,
    #[serde(rename = "Total Attempted")]
    pub total_attempted: usize,
    #[serde(rename = "Average Problem Rating (solved)")]
    pub avg_solved_rating: u32,
    #[serde(rename = "Max Problem Rating (solved)")]
    pub max_solved_rating: Rating,
    #[serde(rename = "Average Problem Rating (attempted)")]
    pub avg_attempted_rating: u32,
    #[serde(rename = "Max Problem Rating (attempted)")]
    pub max_attempted_rating: Rating,
    #[serde(rename = "Top Problem Tags")]
    pub top_tags: String,
    #[serde(rename = "Language Used")]
    pub languages_used: String,
}

impl UserMetrics {
    /// Metric names in display order.
    pub const KEYS: [&'static str; 9] = [
        "User",
        "Total Solved",
        "Total Attempted",
        "Average Problem Rating (solved)",
        "Max Problem Rating (solved)",
        "Average Problem Rating (attempted)",
        "Max Problem Rating (attempted)",
        "Top Problem Tags",
        "Language Used",
    ];

    /// @ai:intent Rendered (key, value) pairs in display order
    /// @ai:effects pure
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.handle.clone(),
            self.total_solved.to_string(),
            self.total_attempted.to_string(),
            self.avg_solved_rating.to_string(),
            self.max_solved_rating.to_string(),
            self.avg_attempted_rating.to_string(),
            self.max_attempted_rating.to_string(),
            self.top_tags.clone(),
            self.languages_used.clone(),
        ];

        Self::KEYS.into_iter().zip(values).collect()
    }
}

/// Per-handle result of a comparison request.
pub type UserOutcome = Result<UserMetrics, FetchError>;
