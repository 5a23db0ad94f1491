//! @ai:module:intent Sources of submission lists: live API, saved dumps, in-memory mock
//! @ai:module:layer infrastructure
//! @ai:module:public_api SubmissionSource, CodeforcesClient, OfflineSource, MockSubmissionSource
//! @ai:module:stateless true

use crate::config::ApiConfig;
use crate::error::{FetchError, Result};
use crate::submission::{StatusResponse, SubmissionLoader, SubmissionRecord};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

/// @ai:intent Trait for anything that can produce a handle's submissions
pub trait SubmissionSource: Send + Sync {
    /// @ai:intent Fetch all submissions for a handle
    fn fetch_submissions(
        &self,
        handle: &str,
    ) -> impl Future<Output = std::result::Result<Vec<SubmissionRecord>, FetchError>> + Send;
}

/// @ai:intent HTTP client for the Codeforces user.status endpoint
pub struct CodeforcesClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl CodeforcesClient {
    /// @ai:intent Create a new client with the configured timeout
    /// @ai:effects pure
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    /// @ai:intent Full URL of the user.status method
    /// @ai:effects pure
    fn status_url(&self) -> String {
        format!("{}/user.status", self.config.base_url.trim_end_matches('/'))
    }
}

impl SubmissionSource for CodeforcesClient {
    /// @ai:intent Request the submission list and unwrap the API envelope
    /// @ai:effects network
    async fn fetch_submissions(
        &self,
        handle: &str,
    ) -> std::result::Result<Vec<SubmissionRecord>, FetchError> {
        tracing::debug!("Requesting submissions for {}", handle);

        let response = self
            .client
            .get(self.status_url())
            .query(&[
                ("handle", handle.to_string()),
                ("from", self.config.from.to_string()),
                ("count", self.config.count.to_string()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::new(handle, e))?;

        // Failures such as unknown handles arrive as non-2xx replies with a JSON body
        let status = response.status();

        let body: StatusResponse = response.json().await.map_err(|e| {
            FetchError::new(handle, format!("unreadable response ({}): {}", status, e))
        })?;

        let submissions = body.into_submissions(handle)?;
        tracing::debug!("Fetched {} submissions for {}", submissions.len(), handle);
        Ok(submissions)
    }
}

/// @ai:intent Serves submissions from `<dir>/<handle>.json` dumps
pub struct OfflineSource {
    dir: PathBuf,
    loader: SubmissionLoader,
}

impl OfflineSource {
    /// @ai:intent Create a source reading dumps from a directory
    /// @ai:effects pure
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            loader: SubmissionLoader::new(),
        }
    }
}

impl SubmissionSource for OfflineSource {
    /// @ai:intent Load the handle's dump
    /// @ai:effects fs:read
    async fn fetch_submissions(
        &self,
        handle: &str,
    ) -> std::result::Result<Vec<SubmissionRecord>, FetchError> {
        let path = SubmissionLoader::dump_path(&self.dir, handle);
        self.loader
            .load_dump(&path)
            .map_err(|e| FetchError::new(handle, e))
    }
}

/// @ai:intent In-memory source for tests, with optional per-handle latency
#[derive(Default)]
pub struct MockSubmissionSource {
    responses: HashMap<String, std::result::Result<Vec<SubmissionRecord>, String>>,
    delays: HashMap<String, Duration>,
}

impl MockSubmissionSource {
    /// @ai:intent Create an empty mock; unknown handles fail
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Register submissions for a handle
    /// @ai:effects pure
    pub fn with_submissions(mut self, handle: &str, submissions: Vec<SubmissionRecord>) -> Self {
        self.responses.insert(handle.to_string(), Ok(submissions));
        self
    }

    /// @ai:intent Register a failure cause for a handle
    /// @ai:effects pure
    pub fn with_failure(mut self, handle: &str, cause: &str) -> Self {
        self.responses.insert(handle.to_string(), Err(cause.to_string()));
        self
    }

    /// @ai:intent Delay the reply for a handle
    /// @ai:effects pure
    pub fn with_delay(mut self, handle: &str, delay: Duration) -> Self {
        self.delays.insert(handle.to_string(), delay);
        self
    }
}

impl SubmissionSource for MockSubmissionSource {
    /// @ai:intent Return the registered reply
    /// @ai:effects time
    async fn fetch_submissions(
        &self,
        handle: &str,
    ) -> std::result::Result<Vec<SubmissionRecord>, FetchError> {
        if let Some(delay) = self.delays.get(handle) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(handle) {
            Some(Ok(submissions)) => Ok(submissions.clone()),
            Some(Err(cause)) => Err(FetchError::new(handle, cause)),
            None => Err(FetchError::new(
                handle,
                format!("handle: User with handle {} not found", handle),
            )),
        }
    }
}
