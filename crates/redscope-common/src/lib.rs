pub mod errors;
pub mod id;

pub use errors::{ConfigError, RedscopeError};
pub use id::{new_id, MessageId};

/// Assistant message every new transcript starts with unless configured otherwise.
pub const DEFAULT_GREETING: &str = "Hello! How can I help you today?";
