use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// redscope: chat with the Reddit analytics backend and browse subreddit posts.
#[derive(Parser, Debug)]
#[command(name = "redscope", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error, or a filter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Backend environment (production or development).
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Base URL override for the selected environment.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat session (the default).
    Chat,
    /// Ask one question and print the reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Fetch the latest posts for one or more subreddits.
    Posts {
        #[arg(required = true, num_args = 1..)]
        subreddits: Vec<String>,
        /// Posts to fetch per subreddit.
        #[arg(long)]
        limit: Option<u32>,
        /// Carousel page to show (1-based).
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Only show posts flagged as new.
        #[arg(long)]
        new: bool,
    },
    /// List the configured subreddits.
    Subreddits,
}

pub fn parse() -> Args {
    Args::parse()
}
