//! Paged view over fetched posts.

use crate::post::RedditPost;

#[derive(Debug, Clone)]
pub struct PostCarousel {
    posts: Vec<RedditPost>,
    per_page: usize,
    current: usize,
}

impl PostCarousel {
    pub const DEFAULT_PER_PAGE: usize = 3;

    pub fn new(posts: Vec<RedditPost>) -> Self {
        Self::with_page_size(posts, Self::DEFAULT_PER_PAGE)
    }

    /// A page size of zero is treated as one.
    pub fn with_page_size(posts: Vec<RedditPost>, per_page: usize) -> Self {
        Self {
            posts,
            per_page: per_page.max(1),
            current: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.posts.len().div_ceil(self.per_page)
    }

    /// Zero-based index of the page being shown.
    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.total_pages() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a zero-based page, clamped to the last page.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.min(self.total_pages().saturating_sub(1));
    }

    pub fn current_posts(&self) -> &[RedditPost] {
        let start = (self.current * self.per_page).min(self.posts.len());
        let end = (start + self.per_page).min(self.posts.len());
        &self.posts[start..end]
    }

    /// Paging controls only appear when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.posts.len() > self.per_page
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current + 1, self.total_pages())
    }
}
