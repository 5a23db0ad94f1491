//! @ai:module:intent Fan out one fetch-and-aggregate task per handle and join them
//! @ai:module:layer application
//! @ai:module:public_api ComparisonExecutor, validate_handles
//! @ai:module:stateless false

use crate::config::CompareConfig;
use crate::error::{Error, Result};
use crate::metrics::{MetricsAggregator, MetricsAggregatorTrait, UserOutcome};
use crate::runner::client::SubmissionSource;
use std::sync::Arc;

/// @ai:intent Trim handles, drop blanks, and enforce the handle limit
/// @ai:effects pure
pub fn validate_handles(raw: &[String], max: usize) -> Result<Vec<String>> {
    let handles: Vec<String> = raw
        .iter()
        .map(|h| h.trim())
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect();

    if handles.is_empty() {
        return Err(Error::EmptyInput);
    }

    if handles.len() > max {
        return Err(Error::TooManyHandles {
            count: handles.len(),
            max,
        });
    }

    Ok(handles)
}

/// @ai:intent Runs a comparison request against a submission source
pub struct ComparisonExecutor<S: SubmissionSource + 'static> {
    source: Arc<S>,
    max_handles: usize,
}

impl<S: SubmissionSource + 'static> ComparisonExecutor<S> {
    /// @ai:intent Create a new executor
    /// @ai:effects pure
    pub fn new(source: Arc<S>, max_handles: usize) -> Self {
        Self {
            source,
            max_handles,
        }
    }

    /// @ai:intent Create an executor using the configured handle limit
    /// @ai:effects pure
    pub fn from_config(source: Arc<S>, config: &CompareConfig) -> Self {
        Self::new(source, config.run.max_handles)
    }

    /// @ai:intent Fetch and aggregate every handle concurrently
    /// @ai:post outcomes are in the same order as the accepted handles
    /// @ai:effects network
    pub async fn compare(&self, handles: &[String]) -> Result<Vec<UserOutcome>> {
        let handles = validate_handles(handles, self.max_handles)?;
        tracing::info!("Fetching stats for {}...", handles.join(", "));

        let tasks: Vec<_> = handles
            .into_iter()
            .map(|handle| {
                let source = Arc::clone(&self.source);
                let worker_handle = handle.clone();
                let task = tokio::spawn(async move {
                    fetch_and_aggregate(source.as_ref(), &worker_handle).await
                });
                (handle, task)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(tasks.len());

        for (handle, task) in tasks {
            let outcome = task.await?;

            match &outcome {
                Ok(metrics) => tracing::debug!(
                    "{}: {} solved, {} attempted",
                    handle,
                    metrics.total_solved,
                    metrics.total_attempted
                ),
                Err(e) => tracing::warn!("{}", e),
            }

            outcomes.push(outcome);
        }

        tracing::info!("Comparison complete.");
        Ok(outcomes)
    }
}

/// @ai:intent Fetch one handle's submissions and reduce them to metrics
/// @ai:effects network
async fn fetch_and_aggregate<S: SubmissionSource>(source: &S, handle: &str) -> UserOutcome {
    let submissions = source.fetch_submissions(handle).await?;
    Ok(MetricsAggregator::new().aggregate(handle, &submissions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::client::MockSubmissionSource;
    use crate::submission::SubmissionRecord;
    use std::time::Duration;

    fn handles(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| h.to_string()).collect()
    }

    fn solved(name: &str) -> SubmissionRecord {
        SubmissionRecord::new(name, Some(1500), "OK", "GNU C++17", &["dp"])
    }

    #[test]
    fn test_validate_drops_blank_handles() {
        let result = validate_handles(&handles(&[" tourist ", "", "  ", "petr"]), 5).unwrap();
        assert_eq!(result, vec!["tourist", "petr"]);
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        let err = validate_handles(&handles(&["", " "]), 5).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_validate_rejects_too_many() {
        let err = validate_handles(&handles(&["a", "b", "c", "d", "e", "f"]), 5).unwrap_err();
        assert!(matches!(err, Error::TooManyHandles { count: 6, max: 5 }));
    }

    #[tokio::test]
    async fn test_outcomes_follow_input_order() {
        let source = MockSubmissionSource::new()
            .with_submissions("slow", vec![solved("A")])
            .with_delay("slow", Duration::from_millis(100))
            .with_submissions("fast", vec![solved("A"), solved("B")]);

        let executor = ComparisonExecutor::new(Arc::new(source), 5);
        let outcomes = executor.compare(&handles(&["slow", "fast"])).await.unwrap();

        let names: Vec<_> = outcomes
            .iter()
            .map(|o| o.as_ref().unwrap().handle.as_str())
            .collect();
        assert_eq!(names, vec!["slow", "fast"]);
        assert_eq!(outcomes[1].as_ref().unwrap().total_solved, 2);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_to_its_handle() {
        let source = MockSubmissionSource::new()
            .with_submissions("tourist", vec![solved("A")])
            .with_failure("broken", "connection reset");

        let executor = ComparisonExecutor::new(Arc::new(source), 5);
        let outcomes = executor
            .compare(&handles(&["broken", "tourist"]))
            .await
            .unwrap();

        assert_eq!(
            outcomes[0].as_ref().unwrap_err().to_string(),
            "Error for broken: connection reset"
        );
        assert_eq!(outcomes[1].as_ref().unwrap().total_solved, 1);
    }

    #[tokio::test]
    async fn test_all_handles_failing() {
        let executor = ComparisonExecutor::new(Arc::new(MockSubmissionSource::new()), 5);
        let outcomes = executor.compare(&handles(&["x", "y"])).await.unwrap();
        assert!(outcomes.iter().all(|o| o.is_err()));
    }

    #[tokio::test]
    async fn test_empty_request_is_rejected() {
        let executor = ComparisonExecutor::new(Arc::new(MockSubmissionSource::new()), 5);
        let err = executor.compare(&[]).await.unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }
}
