//! Subreddit post browsing.
//!
//! Fetches recent posts from the backend's posts endpoint and pages
//! through them a few at a time.

pub mod carousel;
pub mod client;
pub mod grouping;
pub mod post;

pub use carousel::PostCarousel;
pub use client::{PostsClient, PostsRequest, DEFAULT_LIMIT};
pub use grouping::{filter_posts, group_by_subreddit, PostTab};
pub use post::RedditPost;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("no subreddit selected")]
    NoSubreddit,
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to fetch posts: HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid response: missing 'posts' field")]
    MissingPosts,
}
