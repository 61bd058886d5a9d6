//! Plain-text rendering of transcript messages and posts.

use chrono::{DateTime, Local, TimeZone, Utc};
use redscope_chat::{Message, MessageContent, Rejection, Role};
use redscope_feed::RedditPost;
use serde_json::Value;

pub fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "ME",
        Role::Assistant => "AI",
    }
}

/// `HH:MM` in the local time zone.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}

pub fn format_time_in<Tz: TimeZone>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

/// Text body of a message. Structured content is spelled out: arrays
/// one pretty-printed item at a time, objects as `key: value` lines.
pub fn content_text(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Structured(Value::Array(items)) => items
            .iter()
            .map(|item| serde_json::to_string_pretty(item).unwrap_or_else(|_| item.to_string()))
            .collect::<Vec<_>>()
            .join("\n"),
        MessageContent::Structured(Value::Object(fields)) => fields
            .iter()
            .map(|(key, value)| format!("{key}: {}", scalar_text(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        MessageContent::Structured(other) => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `[HH:MM] AI: first line`, with continuation lines indented under it.
pub fn message_block(message: &Message) -> String {
    message_block_at(message, &format_time(message.timestamp))
}

fn message_block_at(message: &Message, time: &str) -> String {
    let prefix = format!("[{time}] {}: ", speaker(message.role));
    let indent = " ".repeat(prefix.chars().count());
    let body = content_text(&message.content);

    let mut out = String::new();
    for (i, line) in body.lines().enumerate() {
        if i == 0 {
            out.push_str(&prefix);
        } else {
            out.push('\n');
            out.push_str(&indent);
        }
        out.push_str(line);
    }
    if out.is_empty() {
        out.push_str(prefix.trim_end());
    }
    out
}

pub fn rejection_notice(reason: Rejection) -> &'static str {
    match reason {
        Rejection::Empty => "nothing to send",
        Rejection::Pending => "still waiting for the previous reply",
        Rejection::NoRuntime => "chat session is not running",
    }
}

pub fn post_block(post: &RedditPost, now: DateTime<Utc>) -> String {
    let mut title = post.title.clone();
    if post.is_new {
        title.push_str(" [New]");
    }
    if post.is_image() {
        title.push_str(" [image]");
    }
    format!(
        "{title}\n  r/{} • by {} • {}\n  ▲ {}  comments {}  {}",
        post.subreddit,
        post.author,
        post.age(now),
        post.score,
        post.num_comments,
        post.reddit_link(),
    )
}
