//! Typed HTTP client for the external summarization endpoint.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default generate endpoint of a locally running model server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Default model name sent with each request.
pub const DEFAULT_MODEL: &str = "llama3";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const PROMPT_PREFIX: &str = "Summarize the following note in a short paragraph:\n\n";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("summarizer returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response shape")]
    BadResponse,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Client for the summarization service.
///
/// One request per call, no retry. Failures are reported to the caller and
/// the note content is never touched on the error path; the controller
/// decides what, if anything, a successful summary replaces.
pub struct Summarizer {
    endpoint: String,
    model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl Default for Summarizer {
    fn default() -> Summarizer {
        Summarizer::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }
}

impl Summarizer {
    pub fn new(endpoint: &str, model: &str) -> Summarizer {
        Summarizer {
            endpoint: endpoint.to_owned(),
            model: model.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Summarizer {
        self.timeout = timeout;
        self
    }

    /// Asks the service to summarize `text`, returning the replacement
    /// text verbatim from the response's `response` field.
    ///
    /// Callers guard against empty input; see
    /// [`Controller::begin_summarize`](crate::controller::Controller::begin_summarize).
    ///
    /// # Errors
    /// - [`SummarizeError::Http`] on a connection error or timeout
    /// - [`SummarizeError::Status`] on a non-success HTTP status
    /// - [`SummarizeError::BadResponse`] when the body is not a JSON
    ///   object carrying a string `response` field
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt: format!("{PROMPT_PREFIX}{text}"),
            stream: false,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SummarizeError::Status(resp.status()));
        }

        let parsed = resp
            .json::<GenerateResponse>()
            .await
            .map_err(|_| SummarizeError::BadResponse)?;

        parsed.response.ok_or(SummarizeError::BadResponse)
    }
}
