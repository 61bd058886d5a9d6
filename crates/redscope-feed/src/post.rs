use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One post as returned by the posts endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditPost {
    pub id: String,
    pub subreddit: String,
    pub author: String,
    pub title: String,
    /// Creation time in epoch milliseconds.
    pub date: i64,
    pub score: i64,
    pub ups: i64,
    pub downs: i64,
    pub num_comments: u64,
    pub url: String,
    pub permalink: String,
    pub word_count: u64,
    #[serde(default, rename = "isNew", alias = "is_new")]
    pub is_new: bool,
}

const IMAGE_EXTENSIONS: &[&str] = &[".jpeg", ".jpg", ".gif", ".png"];

impl RedditPost {
    pub fn reddit_link(&self) -> String {
        format!("https://reddit.com{}", self.permalink)
    }

    pub fn is_image(&self) -> bool {
        IMAGE_EXTENSIONS.iter().any(|ext| self.url.ends_with(ext))
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.date).single()
    }

    /// Relative age such as "3 hours ago".
    pub fn age(&self, now: DateTime<Utc>) -> String {
        match self.created_at() {
            Some(created) => format_age(now.signed_duration_since(created).num_seconds()),
            None => "at an unknown time".into(),
        }
    }
}

fn format_age(seconds: i64) -> String {
    if seconds < 0 {
        return "in the future".into();
    }
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    if minutes < 1 {
        "less than a minute ago".into()
    } else if minutes == 1 {
        "1 minute ago".into()
    } else if hours < 1 {
        format!("{minutes} minutes ago")
    } else if hours == 1 {
        "about 1 hour ago".into()
    } else if days < 1 {
        format!("about {hours} hours ago")
    } else if days == 1 {
        "1 day ago".into()
    } else if days < 30 {
        format!("{days} days ago")
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

#[cfg(test)]
pub(crate) fn sample_post(id: &str, subreddit: &str) -> RedditPost {
    RedditPost {
        id: id.into(),
        subreddit: subreddit.into(),
        author: "someone".into(),
        title: format!("post {id}"),
        date: 1_700_000_000_000,
        score: 10,
        ups: 12,
        downs: 2,
        num_comments: 4,
        url: format!("https://example.com/{id}"),
        permalink: format!("/r/{subreddit}/comments/{id}/"),
        word_count: 20,
        is_new: false,
    }
}
