//! Conversation session management.
//!
//! A `SessionStore` holds the transcript and the pending flag, and
//! settles every accepted question into exactly one assistant message.

mod manager;
mod submit;
mod transcript;
mod types;

#[cfg(test)]
mod tests;

pub use manager::SessionStore;
pub use redscope_common::DEFAULT_GREETING;
pub use transcript::Transcript;
pub use types::{PendingReply, Rejection, Submission};
