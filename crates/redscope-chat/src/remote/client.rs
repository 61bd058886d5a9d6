//! Answer client struct, request building, and response parsing.

use crate::{Answer, AnswerUnavailable};

use super::config::RemoteConfig;

/// Longest slice of an error body kept in `AnswerUnavailable::Status`.
const ERROR_BODY_LIMIT: usize = 200;

/// reqwest-backed `AnswerClient`.
pub struct HttpAnswerClient {
    pub(crate) config: RemoteConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpAnswerClient {
    pub fn new(config: RemoteConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    pub fn ask_url(&self) -> &str {
        &self.config.ask_url
    }

    pub(crate) fn build_request_body(query: &str) -> serde_json::Value {
        serde_json::json!({ "query": query })
    }

    /// Decode a response body that may or may not be JSON.
    pub(crate) fn parse_response(body: &[u8]) -> Result<Answer, AnswerUnavailable> {
        let json: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| AnswerUnavailable::Parse(e.to_string()))?;
        Answer::from_body(json)
    }

    pub(crate) fn truncate_error_body(text: &str) -> String {
        text.chars().take(ERROR_BODY_LIMIT).collect()
    }
}
