//! @ai:module:intent Reduce one user's submissions into summary metrics
//! @ai:module:layer application
//! @ai:module:public_api MetricsAggregator, MetricsAggregatorTrait
//! @ai:module:stateless true

use crate::metrics::language::{normalize_language, render_usage};
use crate::metrics::types::{Rating, UserMetrics};
use crate::submission::SubmissionRecord;
use std::collections::{HashMap, HashSet};

/// @ai:intent Trait for metrics aggregation
pub trait MetricsAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate one user's submissions into metrics
    fn aggregate(&self, handle: &str, submissions: &[SubmissionRecord]) -> UserMetrics;
}

/// @ai:intent Computes solved/attempted counts, ratings, tags, and languages
pub struct MetricsAggregator;

/// Running count, sum, and max over unique problems.
#[derive(Debug, Default)]
struct RatingTally {
    count: usize,
    sum: f64,
    max: Rating,
}

impl RatingTally {
    /// @ai:intent Fold one unique problem into the tally
    /// @ai:effects pure
    fn record(&mut self, rating: Option<u32>) {
        match rating {
            Some(r) => {
                self.sum += r as f64;
                if r as f64 > self.max.as_f64() {
                    self.max = Rating::Exact(r);
                }
            }
            // Unrated problems count as the average so far, except the very first one
            None if self.count > 0 => {
                let average = self.sum / self.count as f64;
                self.sum += average;
                if average > self.max.as_f64() {
                    self.max = Rating::Estimated(average);
                }
            }
            None => {}
        }

        self.count += 1;
    }

    /// @ai:intent Average rating rounded half-to-even, 0 when empty
    /// @ai:effects pure
    fn rounded_average(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }

        (self.sum / self.count as f64).round_ties_even() as u32
    }
}

impl MetricsAggregator {
    /// @ai:intent Create a new metrics aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Deduplicate by problem name in input order and tally ratings
    /// @ai:effects pure
    fn tally_unique<'a, I>(submissions: I) -> (Vec<&'a SubmissionRecord>, RatingTally)
    where
        I: IntoIterator<Item = &'a SubmissionRecord>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        let mut tally = RatingTally::default();

        for sub in submissions {
            if seen.insert(sub.problem_name()) {
                tally.record(sub.problem.rating);
                unique.push(sub);
            }
        }

        (unique, tally)
    }

    /// @ai:intent Tags ranked by frequency, skipping the most frequent, at most five
    /// @ai:effects pure
    fn top_tags(accepted: &[&SubmissionRecord]) -> String {
        let ranked = rank_by_frequency(
            accepted
                .iter()
                .flat_map(|sub| sub.problem.tags.iter().cloned()),
        );

        ranked
            .into_iter()
            .skip(1)
            .take(5)
            .map(|(tag, _)| tag)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// @ai:intent Normalized languages ranked by frequency
    /// @ai:effects pure
    fn languages_used(accepted: &[&SubmissionRecord]) -> String {
        let ranked = rank_by_frequency(
            accepted
                .iter()
                .map(|sub| normalize_language(&sub.programming_language)),
        );

        render_usage(&ranked)
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// @ai:intent Count items and sort by descending count, ties in first-seen order
/// @ai:effects pure
fn rank_by_frequency<I: Iterator<Item = String>>(items: I) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

impl MetricsAggregatorTrait for MetricsAggregator {
    /// @ai:intent Aggregate one user's submissions into metrics
    /// @ai:effects pure
    fn aggregate(&self, handle: &str, submissions: &[SubmissionRecord]) -> UserMetrics {
        let (accepted, solved) =
            Self::tally_unique(submissions.iter().filter(|sub| sub.is_accepted()));
        let (_, attempted) = Self::tally_unique(submissions);

        UserMetrics {
            handle: handle.to_string(),
            total_solved: solved.count,
            total_attempted: attempted.count,
            avg_solved_rating: solved.rounded_average(),
            max_solved_rating: solved.max,
            avg_attempted_rating: attempted.rounded_average(),
            max_attempted_rating: attempted.max,
            top_tags: Self::top_tags(&accepted),
            languages_used: Self::languages_used(&accepted),
        }
    }
}
