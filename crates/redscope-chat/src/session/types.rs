//! Submission outcomes and the pending-flag guard.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tokio::task::{JoinError, JoinHandle};

use crate::answer::FALLBACK_REPLY;
use crate::message::{Message, MessageContent, Role};

use super::manager::Shared;

/// Why `submit` did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The text was empty after trimming.
    Empty,
    /// Another question is still outstanding.
    Pending,
    /// Called outside a tokio runtime.
    NoRuntime,
}

/// Result of `SessionStore::submit`.
#[derive(Debug)]
pub enum Submission {
    Rejected(Rejection),
    Accepted(PendingReply),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Submission::Rejected(reason) => Some(*reason),
            Submission::Accepted(_) => None,
        }
    }
}

/// Handle to an accepted question.
///
/// Dropping it does not cancel the request; the reply is still appended
/// to the transcript when it settles.
#[derive(Debug)]
pub struct PendingReply {
    pub(crate) user: Message,
    pub(crate) handle: JoinHandle<Message>,
}

impl PendingReply {
    /// The user message appended when the question was accepted.
    pub fn user_message(&self) -> &Message {
        &self.user
    }

    /// Wait for the assistant message this question settled into.
    pub async fn settled(self) -> Result<Message, JoinError> {
        self.handle.await
    }
}

/// Holds the pending flag for one accepted question.
///
/// Dropped without `settle` (the runtime shut down mid-request, or the
/// task unwound), it records `FALLBACK_REPLY` so the question still gets
/// its assistant message. The flag clears on drop either way.
pub(crate) struct PendingGuard {
    shared: Arc<Shared>,
    settled: bool,
}

impl PendingGuard {
    /// Set the flag, or return `None` if it was already set.
    pub(crate) fn acquire(shared: &Arc<Shared>) -> Option<Self> {
        shared
            .pending
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(Self {
            shared: Arc::clone(shared),
            settled: false,
        })
    }

    /// Append the assistant message, then release the flag.
    pub(crate) fn settle(mut self, content: MessageContent) -> Message {
        let reply = self.append_reply(content);
        self.settled = true;
        reply
    }

    fn append_reply(&self, content: MessageContent) -> Message {
        let mut state = self.shared.lock();
        state.transcript.append(Role::Assistant, content)
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.settled {
            self.append_reply(MessageContent::Text(FALLBACK_REPLY.to_string()));
        }
        self.shared.pending.store(false, Ordering::Release);
    }
}
