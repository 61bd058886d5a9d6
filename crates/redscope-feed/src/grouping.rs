//! Tab filtering and per-subreddit grouping.

use crate::post::RedditPost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostTab {
    #[default]
    All,
    New,
}

pub fn filter_posts(posts: &[RedditPost], tab: PostTab) -> Vec<RedditPost> {
    match tab {
        PostTab::All => posts.to_vec(),
        PostTab::New => posts.iter().filter(|p| p.is_new).cloned().collect(),
    }
}

/// Group posts by subreddit, in order of each subreddit's first post.
pub fn group_by_subreddit(posts: &[RedditPost]) -> Vec<(String, Vec<RedditPost>)> {
    let mut groups: Vec<(String, Vec<RedditPost>)> = Vec::new();
    for post in posts {
        match groups.iter_mut().find(|(name, _)| *name == post.subreddit) {
            Some((_, group)) => group.push(post.clone()),
            None => groups.push((post.subreddit.clone(), vec![post.clone()])),
        }
    }
    groups
}
