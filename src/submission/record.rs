//! @ai:module:intent Submission records as returned by the user.status endpoint
//! @ai:module:layer domain
//! @ai:module:public_api SubmissionRecord, Problem, StatusResponse
//! @ai:module:stateless true

use crate::error::FetchError;
use serde::{Deserialize, Serialize};

/// Verdict string the judge uses for an accepted submission.
pub const ACCEPTED_VERDICT: &str = "OK";

/// Envelope status the API uses for a successful call.
pub const STATUS_OK: &str = "OK";

/// @ai:intent Problem attached to a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Display name; the only key used to tell problems apart
    pub name: String,
    /// Absent for unrated problems
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// @ai:intent One attempted solution by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub problem: Problem,
    /// Missing while the submission is still queued for judging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    pub programming_language: String,
}

impl SubmissionRecord {
    /// @ai:intent Build a record from its parts
    /// @ai:effects pure
    pub fn new(
        name: impl Into<String>,
        rating: Option<u32>,
        verdict: impl Into<String>,
        programming_language: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            problem: Problem {
                name: name.into(),
                rating,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
            verdict: Some(verdict.into()),
            programming_language: programming_language.into(),
        }
    }

    /// @ai:intent Problem display name
    /// @ai:effects pure
    pub fn problem_name(&self) -> &str {
        &self.problem.name
    }

    /// @ai:intent Whether the judge accepted this submission
    /// @ai:effects pure
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(ACCEPTED_VERDICT)
    }
}

/// @ai:intent Envelope wrapping every API reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<SubmissionRecord>>,
}

impl StatusResponse {
    /// @ai:intent Unwrap the submissions or turn a failed status into a fetch error
    /// @ai:effects pure
    pub fn into_submissions(self, handle: &str) -> Result<Vec<SubmissionRecord>, FetchError> {
        if self.status != STATUS_OK {
            let cause = self.comment.unwrap_or_else(|| "unknown error".to_string());
            return Err(FetchError::new(handle, cause));
        }

        Ok(self.result.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_submission() {
        let json = r#"{
            "id": 251234567,
            "contestId": 1850,
            "creationTimeSeconds": 1690000000,
            "problem": {
                "contestId": 1850,
                "index": "A",
                "name": "To My Critics",
                "type": "PROGRAMMING",
                "rating": 800,
                "tags": ["implementation", "sortings"]
            },
            "author": {"members": [{"handle": "tourist"}]},
            "programmingLanguage": "GNU C++17",
            "verdict": "OK",
            "testset": "TESTS",
            "passedTestCount": 12
        }"#;

        let record: SubmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.problem_name(), "To My Critics");
        assert_eq!(record.problem.rating, Some(800));
        assert_eq!(record.problem.tags, vec!["implementation", "sortings"]);
        assert_eq!(record.programming_language, "GNU C++17");
        assert!(record.is_accepted());
    }

    #[test]
    fn test_deserialize_unrated_queued_submission() {
        let json = r#"{
            "problem": {"name": "Fresh Problem"},
            "programmingLanguage": "PyPy 3-64"
        }"#;

        let record: SubmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.problem.rating, None);
        assert!(record.problem.tags.is_empty());
        assert!(!record.is_accepted());
    }

    #[test]
    fn test_failed_status_becomes_fetch_error() {
        let response: StatusResponse = serde_json::from_str(
            r#"{"status": "FAILED", "comment": "handle: User with handle nobody not found"}"#,
        )
        .unwrap();

        let err = response.into_submissions("nobody").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error for nobody: handle: User with handle nobody not found"
        );
    }

    #[test]
    fn test_ok_status_without_result_is_empty() {
        let response = StatusResponse {
            status: STATUS_OK.to_string(),
            comment: None,
            result: None,
        };
        assert!(response.into_submissions("tourist").unwrap().is_empty());
    }

    #[test]
    fn test_verdict_in_status_field_is_not_success() {
        let response = StatusResponse {
            status: "WRONG_ANSWER".to_string(),
            comment: None,
            result: Some(vec![SubmissionRecord::new("A", None, "OK", "GNU C++17", &[])]),
        };

        let err = response.into_submissions("tourist").unwrap_err();
        assert_eq!(err.cause, "unknown error");
    }
}
