//! Interactive chat loop over stdin.

use std::io::Write;

use redscope_chat::{Rejection, SessionStore, Submission};
use redscope_common::RedscopeError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::render;

const HELP: &str = "commands: /history  /help  /quit";

pub async fn run(store: SessionStore) -> Result<(), RedscopeError> {
    for message in store.snapshot() {
        println!("{}", render::message_block(&message));
    }
    println!("({HELP})");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{HELP}");
                continue;
            }
            "/history" => {
                for message in store.snapshot() {
                    println!("{}", render::message_block(&message));
                }
                continue;
            }
            _ => {}
        }

        store.set_draft(line);
        match store.submit_draft() {
            Submission::Rejected(Rejection::Empty) => {}
            Submission::Rejected(reason) => eprintln!("{}", render::rejection_notice(reason)),
            Submission::Accepted(reply) => {
                eprintln!("...");
                let message = reply
                    .settled()
                    .await
                    .map_err(|e| RedscopeError::Chat(e.to_string()))?;
                println!("{}", render::message_block(&message));
            }
        }
    }

    info!(messages = store.message_count(), "chat session ended");
    Ok(())
}
