use redscope_common::DEFAULT_GREETING;
use serde::{Deserialize, Serialize};

/// Chat session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Assistant message every new transcript starts with.
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
        }
    }
}
