//! AnswerClient trait implementation for HttpAnswerClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{Answer, AnswerClient, AnswerUnavailable};

use super::client::HttpAnswerClient;

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn ask(&self, query: &str) -> Result<Answer, AnswerUnavailable> {
        let body = Self::build_request_body(query);

        debug!(url = %self.config.ask_url, "answer request");

        let response = self
            .http
            .post(&self.config.ask_url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AnswerUnavailable::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AnswerUnavailable::Status {
                status: status.as_u16(),
                body: Self::truncate_error_body(&text),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnswerUnavailable::Network(e.to_string()))?;

        Self::parse_response(&bytes)
    }
}
