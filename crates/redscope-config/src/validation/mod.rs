//! Full configuration validation.
//!
//! Each section has its own check; errors from all of them are collected
//! into a single `ConfigError`.

mod helpers;


use crate::schema::RedscopeConfig;
use redscope_common::ConfigError;

use helpers::{validate_non_empty, validate_path, validate_range, validate_url};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RedscopeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_backend(&mut errors, config);
    validate_chat(&mut errors, config);
    validate_feed(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_backend(errors: &mut Vec<String>, config: &RedscopeConfig) {
    let backend = &config.backend;
    validate_url(errors, "backend.production_url", &backend.production_url);
    validate_url(errors, "backend.development_url", &backend.development_url);
    validate_path(errors, "backend.ask_path", &backend.ask_path);
    validate_path(errors, "backend.posts_path", &backend.posts_path);
    validate_range(
        errors,
        "backend.connect_timeout_secs",
        backend.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "backend.request_timeout_secs",
        backend.request_timeout_secs,
        0,
        600,
    );
}

fn validate_chat(errors: &mut Vec<String>, config: &RedscopeConfig) {
    validate_non_empty(errors, "chat.greeting", &config.chat.greeting);
}

fn validate_feed(errors: &mut Vec<String>, config: &RedscopeConfig) {
    let feed = &config.feed;
    validate_range(errors, "feed.posts_per_page", feed.posts_per_page, 1, 50);
    validate_range(errors, "feed.default_limit", feed.default_limit, 1, 100);
    for (i, name) in feed.subreddits.iter().enumerate() {
        validate_non_empty(errors, &format!("feed.subreddits[{i}]"), name);
    }
}
