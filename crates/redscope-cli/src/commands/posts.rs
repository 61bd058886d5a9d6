//! Subreddit post browsing.

use chrono::Utc;
use redscope_common::RedscopeError;
use redscope_config::RedscopeConfig;
use redscope_feed::{
    filter_posts, group_by_subreddit, PostCarousel, PostTab, PostsClient, PostsRequest,
};
use tracing::info;

use crate::render;

pub async fn run(
    config: &RedscopeConfig,
    subreddits: Vec<String>,
    limit: Option<u32>,
    page: usize,
    new_only: bool,
) -> Result<(), RedscopeError> {
    let client = PostsClient::new(config.backend.posts_url(), config.backend.connect_timeout());
    let request =
        PostsRequest::new(subreddits).with_limit(limit.unwrap_or(config.feed.default_limit));

    let posts = client
        .fetch(&request)
        .await
        .map_err(|e| RedscopeError::Feed(e.to_string()))?;
    info!(count = posts.len(), "fetched posts");

    let tab = if new_only { PostTab::New } else { PostTab::All };
    let posts = filter_posts(&posts, tab);
    if posts.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    let now = Utc::now();
    let per_page = config.feed.posts_per_page as usize;
    for (subreddit, group) in group_by_subreddit(&posts) {
        let mut carousel = PostCarousel::with_page_size(group, per_page);
        carousel.go_to(page.saturating_sub(1));

        println!("r/{subreddit}");
        for post in carousel.current_posts() {
            println!("{}\n", render::post_block(post, now));
        }
        if carousel.shows_controls() {
            println!("{}\n", carousel.page_label());
        }
    }
    Ok(())
}

pub fn list_subreddits(config: &RedscopeConfig) {
    for name in &config.feed.subreddits {
        println!("r/{name}");
    }
}
