//! Subreddit feed configuration.

use serde::{Deserialize, Serialize};

/// Subreddits offered for selection when none are configured.
pub const DEFAULT_SUBREDDITS: &[&str] = &[
    "Anarchism",
    "Conservative",
    "Liberal",
    "PoliticalDiscussion",
    "Republican",
    "Democrats",
    "Neoliberal",
    "Politics",
    "Socialism",
    "WorldPolitics",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Posts shown per carousel page (valid range: 1-50).
    pub posts_per_page: u32,
    /// Posts requested per subreddit (valid range: 1-100).
    pub default_limit: u32,
    pub subreddits: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            posts_per_page: 3,
            default_limit: 10,
            subreddits: DEFAULT_SUBREDDITS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
