//! Chat core for redscope.
//!
//! A `SessionStore` owns the transcript of one conversation and lets at
//! most one question be outstanding against the remote answer service.
//! Every accepted question settles into exactly one assistant reply,
//! either the service's answer or a fixed fallback message.

pub mod answer;
pub mod message;
pub mod remote;
pub mod session;

use std::time::Duration;

use async_trait::async_trait;

pub use answer::{Answer, FALLBACK_REPLY};
pub use message::{Message, MessageContent, Role};
pub use remote::{HttpAnswerClient, RemoteConfig};
pub use session::{PendingReply, Rejection, SessionStore, Submission, DEFAULT_GREETING};

/// A service that maps a free-text query to an answer payload.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn ask(&self, query: &str) -> Result<Answer, AnswerUnavailable>;
}

/// The remote answer could not be obtained.
///
/// Every variant is recoverable: the session store absorbs it and
/// records `FALLBACK_REPLY` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerUnavailable {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("response has no answer")]
    MissingAnswer,
    #[error("no answer within {0:?}")]
    Timeout(Duration),
    #[error("answer client panicked")]
    Panicked,
}
