//! Submitting a question and settling its reply.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tracing::{debug, info, warn};

use crate::answer::FALLBACK_REPLY;
use crate::message::{MessageContent, Role};
use crate::{Answer, AnswerClient, AnswerUnavailable};

use super::manager::SessionStore;
use super::types::{PendingGuard, PendingReply, Rejection, Submission};

impl SessionStore {
    /// Ask `text` of the remote service.
    ///
    /// Empty or whitespace-only text, or a question already outstanding,
    /// leaves the session untouched. Otherwise the user message is
    /// appended and the draft cleared before this returns; the assistant
    /// message follows when the request settles. The request runs on its
    /// own task and is never cancelled.
    pub fn submit(&self, text: impl Into<String>) -> Submission {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("ignoring empty submission");
            return Submission::Rejected(Rejection::Empty);
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("submit called outside a tokio runtime");
            return Submission::Rejected(Rejection::NoRuntime);
        };

        let (guard, user) = {
            let mut state = self.shared.lock();
            let Some(guard) = PendingGuard::acquire(&self.shared) else {
                debug!("ignoring submission while a reply is pending");
                return Submission::Rejected(Rejection::Pending);
            };
            let user = state
                .transcript
                .append(Role::User, MessageContent::Text(text.clone()));
            state.draft.clear();
            (guard, user)
        };

        info!(id = %user.id, "question submitted");

        let client = Arc::clone(&self.client);
        let timeout = self.timeout;

        let handle = runtime.spawn(async move {
            let content = match request_answer(client, text, timeout).await {
                Ok(answer) => answer.into_content(),
                Err(e) => {
                    warn!("remote answer unavailable: {e}");
                    MessageContent::Text(FALLBACK_REPLY.to_string())
                }
            };
            // The reply is in the transcript before the flag clears.
            let reply = guard.settle(content);
            debug!(id = %reply.id, "reply settled");
            reply
        });

        Submission::Accepted(PendingReply { user, handle })
    }

    /// Submit whatever is in the draft buffer.
    pub fn submit_draft(&self) -> Submission {
        let draft = self.draft();
        self.submit(draft)
    }
}

/// One call to the client. Timeouts and panics count as unavailable.
async fn request_answer(
    client: Arc<dyn AnswerClient>,
    query: String,
    timeout: Option<Duration>,
) -> Result<Answer, AnswerUnavailable> {
    let call = AssertUnwindSafe(async move { client.ask(&query).await }).catch_unwind();

    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| AnswerUnavailable::Timeout(limit))?,
        None => call.await,
    };

    outcome.unwrap_or(Err(AnswerUnavailable::Panicked))
}
