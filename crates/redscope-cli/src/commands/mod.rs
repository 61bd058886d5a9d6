//! Subcommand implementations.

mod ask;
mod chat;
mod posts;

pub use ask::run as ask;
pub use chat::run as chat;
pub use posts::{list_subreddits, run as posts};

use std::sync::Arc;

use redscope_chat::{HttpAnswerClient, RemoteConfig, SessionStore};
use redscope_config::RedscopeConfig;

/// Build a session store wired to the configured ask endpoint.
pub fn session_from_config(config: &RedscopeConfig) -> SessionStore {
    let remote = RemoteConfig::new(config.backend.ask_url())
        .with_connect_timeout(config.backend.connect_timeout());
    tracing::debug!(url = %remote.ask_url, "answer endpoint");
    let client = Arc::new(HttpAnswerClient::new(remote));
    SessionStore::with_greeting(client, &config.chat.greeting)
        .with_timeout(config.backend.request_timeout())
}
