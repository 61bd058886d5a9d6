//! Configuration schema types for redscope.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod chat;
mod feed;
mod system;

pub use backend::*;
pub use chat::*;
pub use feed::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for redscope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedscopeConfig {
    pub backend: BackendConfig,
    pub chat: ChatConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}
