//! Client for the backend's posts endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::post::RedditPost;
use crate::FeedError;

/// Posts requested per subreddit when the caller does not say.
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsRequest {
    pub subreddits: Vec<String>,
    pub limit: u32,
}

impl PostsRequest {
    pub fn new(subreddits: Vec<String>) -> Self {
        Self {
            subreddits,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Deserialize)]
struct PostsResponse {
    posts: Option<Vec<RedditPost>>,
}

pub struct PostsClient {
    posts_url: String,
    http: reqwest::Client,
}

impl PostsClient {
    pub fn new(posts_url: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            posts_url: posts_url.into(),
            http: reqwest::Client::builder()
                .connect_timeout(connect_timeout)
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Fetch the newest posts for every requested subreddit.
    ///
    /// An empty or blank selection is rejected without a request.
    pub async fn fetch(&self, request: &PostsRequest) -> Result<Vec<RedditPost>, FeedError> {
        if request.subreddits.iter().all(|s| s.trim().is_empty()) {
            return Err(FeedError::NoSubreddit);
        }

        debug!(url = %self.posts_url, subreddits = ?request.subreddits, "posts request");

        let response = self
            .http
            .post(&self.posts_url)
            .json(request)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body: PostsResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        body.posts.ok_or(FeedError::MissingPosts)
    }
}
