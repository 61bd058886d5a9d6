//! Answer service client configuration.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Full URL of the ask endpoint.
    pub ask_url: String,
    pub connect_timeout: Duration,
}

impl RemoteConfig {
    pub fn new(ask_url: impl Into<String>) -> Self {
        Self {
            ask_url: ask_url.into(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
