//! One-shot question.

use redscope_chat::{SessionStore, Submission};
use redscope_common::RedscopeError;

use crate::render;

pub async fn run(store: SessionStore, text: &str) -> Result<(), RedscopeError> {
    match store.submit(text) {
        Submission::Rejected(reason) => Err(RedscopeError::Chat(
            render::rejection_notice(reason).to_string(),
        )),
        Submission::Accepted(reply) => {
            let message = reply
                .settled()
                .await
                .map_err(|e| RedscopeError::Chat(e.to_string()))?;
            println!("{}", render::content_text(&message.content));
            Ok(())
        }
    }
}
