//! SessionStore struct and read-side accessors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use redscope_common::DEFAULT_GREETING;

use crate::message::Message;
use crate::AnswerClient;

use super::transcript::Transcript;

pub(crate) struct SessionState {
    pub(crate) transcript: Transcript,
    /// Text typed but not yet submitted.
    pub(crate) draft: String,
}

pub(crate) struct Shared {
    pub(crate) state: Mutex<SessionState>,
    /// Set exactly while a question is outstanding.
    pub(crate) pending: AtomicBool,
}

impl Shared {
    /// Lock the state. Appends are single pushes, so a poisoned lock still
    /// holds a consistent transcript.
    pub(crate) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owns one conversation: the transcript, the draft and the pending flag.
///
/// Cloning is cheap and every clone sees the same session.
#[derive(Clone)]
pub struct SessionStore {
    pub(crate) shared: Arc<Shared>,
    pub(crate) client: Arc<dyn AnswerClient>,
    /// Upper bound on one remote call; `None` waits forever.
    pub(crate) timeout: Option<Duration>,
}

impl SessionStore {
    pub fn new(client: Arc<dyn AnswerClient>) -> Self {
        Self::with_greeting(client, DEFAULT_GREETING)
    }

    pub fn with_greeting(client: Arc<dyn AnswerClient>, greeting: impl Into<String>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SessionState {
                    transcript: Transcript::seeded(greeting),
                    draft: String::new(),
                }),
                pending: AtomicBool::new(false),
            }),
            client,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Copy of the transcript as it is right now.
    pub fn snapshot(&self) -> Vec<Message> {
        self.shared.lock().transcript.messages().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.shared.lock().transcript.len()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.shared.lock().transcript.last().cloned()
    }

    pub fn is_pending(&self) -> bool {
        self.shared.pending.load(Ordering::Acquire)
    }

    pub fn draft(&self) -> String {
        self.shared.lock().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.shared.lock().draft = text.into();
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("messages", &self.message_count())
            .field("pending", &self.is_pending())
            .field("timeout", &self.timeout)
            .finish()
    }
}
