//! Session store behavior against stub answer clients.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use super::*;
use crate::{Answer, AnswerClient, AnswerUnavailable, MessageContent, Role, FALLBACK_REPLY};

/// Replies with a fixed result and counts calls.
struct StubClient {
    reply: Result<Answer, AnswerUnavailable>,
    calls: AtomicUsize,
}

impl StubClient {
    fn answering(answer: Answer) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(answer),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(err: AnswerUnavailable) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl AnswerClient for StubClient {
    async fn ask(&self, _query: &str) -> Result<Answer, AnswerUnavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Echoes the query once the test opens the gate.
struct GatedClient {
    gate: Arc<Notify>,
}

#[async_trait]
impl AnswerClient for GatedClient {
    async fn ask(&self, query: &str) -> Result<Answer, AnswerUnavailable> {
        self.gate.notified().await;
        Ok(Answer::Text(format!("echo: {query}")))
    }
}

struct SlowClient;

#[async_trait]
impl AnswerClient for SlowClient {
    async fn ask(&self, _query: &str) -> Result<Answer, AnswerUnavailable> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Answer::from("too late"))
    }
}

struct PanickingClient;

#[async_trait]
impl AnswerClient for PanickingClient {
    async fn ask(&self, _query: &str) -> Result<Answer, AnswerUnavailable> {
        panic!("client bug");
    }
}

fn accepted(submission: Submission) -> PendingReply {
    match submission {
        Submission::Accepted(reply) => reply,
        Submission::Rejected(reason) => panic!("expected acceptance, got {reason:?}"),
    }
}

async fn wait_until_idle(store: &SessionStore) {
    for _ in 0..200 {
        if !store.is_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("session never settled");
}

#[test]
fn initial_transcript_is_one_greeting() {
    let store = SessionStore::new(StubClient::answering("x".into()));
    let messages = store.snapshot();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::Assistant);
    assert_eq!(messages[0].content, MessageContent::from(DEFAULT_GREETING));
    assert!(!store.is_pending());
}

#[test]
fn custom_greeting_seeds_transcript() {
    let store = SessionStore::with_greeting(StubClient::answering("x".into()), "Ask away.");
    assert_eq!(
        store.last_message().unwrap().content,
        MessageContent::from("Ask away.")
    );
}

#[test]
fn submit_outside_runtime_is_rejected() {
    let store = SessionStore::new(StubClient::answering("x".into()));
    let submission = store.submit("hi");
    assert_eq!(submission.rejection(), Some(Rejection::NoRuntime));
    assert_eq!(store.message_count(), 1);
    assert!(!store.is_pending());
}

#[tokio::test]
async fn string_answer_appends_user_and_assistant() {
    let client = StubClient::answering("hello".into());
    let store = SessionStore::new(client.clone());

    let reply = accepted(store.submit("hi"));
    assert_eq!(reply.user_message().content, MessageContent::from("hi"));
    let assistant = reply.settled().await.unwrap();

    let messages = store.snapshot();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, MessageContent::from("hi"));
    assert_eq!(messages[2], assistant);
    assert_eq!(assistant.role, Role::Assistant);
    assert_eq!(assistant.content, MessageContent::from("hello"));
    assert!(!store.is_pending());
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn item_answer_joins_serialized_items() {
    let store = SessionStore::new(StubClient::answering(Answer::Items(vec![
        json!({"a": 1}),
        json!({"b": 2}),
    ])));

    let assistant = accepted(store.submit("list")).settled().await.unwrap();
    assert_eq!(
        assistant.content,
        MessageContent::Text("{\"a\":1}\n{\"b\":2}".into())
    );
}

#[tokio::test]
async fn object_answer_is_kept_structured() {
    let store = SessionStore::new(StubClient::answering(Answer::Other(
        json!({"positive": 60, "neutral": 30}),
    )));

    let assistant = accepted(store.submit("sentiment")).settled().await.unwrap();
    assert_eq!(
        assistant.content,
        MessageContent::Structured(json!({"positive": 60, "neutral": 30}))
    );
}

#[tokio::test]
async fn failure_appends_fallback_and_clears_pending() {
    let store = SessionStore::new(StubClient::failing(AnswerUnavailable::Network(
        "connection refused".into(),
    )));

    let assistant = accepted(store.submit("hi")).settled().await.unwrap();
    assert_eq!(assistant.content, MessageContent::from(FALLBACK_REPLY));
    assert_eq!(assistant.role, Role::Assistant);
    assert_eq!(store.message_count(), 3);
    assert!(!store.is_pending());
}

#[tokio::test]
async fn empty_and_whitespace_are_rejected() {
    let client = StubClient::answering("x".into());
    let store = SessionStore::new(client.clone());

    for text in ["", " ", "\n\t  "] {
        assert_eq!(store.submit(text).rejection(), Some(Rejection::Empty));
        assert_eq!(store.message_count(), 1);
        assert!(!store.is_pending());
    }
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn submit_while_pending_is_a_noop() {
    let gate = Arc::new(Notify::new());
    let store = SessionStore::new(Arc::new(GatedClient { gate: gate.clone() }));

    let first = accepted(store.submit("first"));
    assert!(store.is_pending());
    assert_eq!(store.message_count(), 2);

    store.set_draft("second");
    assert_eq!(store.submit_draft().rejection(), Some(Rejection::Pending));
    assert_eq!(store.message_count(), 2);
    assert_eq!(store.draft(), "second");

    gate.notify_one();
    let reply = first.settled().await.unwrap();
    assert_eq!(reply.content, MessageContent::from("echo: first"));
    assert!(!store.is_pending());

    let second = accepted(store.submit_draft());
    gate.notify_one();
    second.settled().await.unwrap();
    assert_eq!(store.message_count(), 5);
    assert!(store.draft().is_empty());
}

#[tokio::test]
async fn concurrent_submits_accept_exactly_one() {
    let gate = Arc::new(Notify::new());
    let store = SessionStore::new(Arc::new(GatedClient { gate: gate.clone() }));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.submit(format!("q{i}")) })
        })
        .collect();

    let mut replies = Vec::new();
    for task in tasks {
        if let Submission::Accepted(reply) = task.await.unwrap() {
            replies.push(reply);
        }
    }
    assert_eq!(replies.len(), 1);
    assert_eq!(store.message_count(), 2);

    gate.notify_one();
    replies.pop().unwrap().settled().await.unwrap();
    assert_eq!(store.message_count(), 3);
}

#[tokio::test]
async fn sequential_rounds_alternate_user_and_assistant() {
    let store = SessionStore::new(StubClient::answering("ok".into()));

    for i in 0..5 {
        accepted(store.submit(format!("question {i}")))
            .settled()
            .await
            .unwrap();
    }

    let messages = store.snapshot();
    assert_eq!(messages.len(), 11);
    for pair in messages[1..].chunks(2) {
        assert_eq!(pair[0].role, Role::User);
        assert_eq!(pair[1].role, Role::Assistant);
    }
    for window in messages.windows(2) {
        assert!(window[0].timestamp < window[1].timestamp);
    }
}

#[tokio::test]
async fn accepted_submit_clears_draft() {
    let store = SessionStore::new(StubClient::answering("ok".into()));
    store.set_draft("  what is trending?  ");

    let reply = accepted(store.submit_draft());
    assert!(store.draft().is_empty());
    // The text is stored as typed.
    assert_eq!(
        reply.user_message().content,
        MessageContent::from("  what is trending?  ")
    );
    reply.settled().await.unwrap();
}

#[tokio::test]
async fn timeout_settles_with_fallback() {
    let store =
        SessionStore::new(Arc::new(SlowClient)).with_timeout(Some(Duration::from_millis(50)));

    let assistant = accepted(store.submit("slow")).settled().await.unwrap();
    assert_eq!(assistant.content, MessageContent::from(FALLBACK_REPLY));
    assert!(!store.is_pending());
}

#[tokio::test]
async fn client_panic_settles_with_fallback() {
    let store = SessionStore::new(Arc::new(PanickingClient));

    let assistant = accepted(store.submit("boom")).settled().await.unwrap();
    assert_eq!(assistant.content, MessageContent::from(FALLBACK_REPLY));
    assert!(!store.is_pending());

    // The session stays usable.
    assert!(store.submit("again").is_accepted());
}

#[tokio::test]
async fn dropped_reply_handle_still_settles() {
    let store = SessionStore::new(StubClient::answering("late".into()));

    drop(accepted(store.submit("fire and forget")));
    wait_until_idle(&store).await;

    let last = store.last_message().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, MessageContent::from("late"));
    assert_eq!(store.message_count(), 3);
}

fn current_thread_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

#[test]
fn runtime_shutdown_mid_request_records_fallback() {
    let gate = Arc::new(Notify::new());
    let store = SessionStore::new(Arc::new(GatedClient { gate: gate.clone() }));

    let runtime = current_thread_runtime();
    let reply = runtime.block_on(async { accepted(store.submit("stranded")) });
    assert!(store.is_pending());
    drop(runtime);
    drop(reply);

    let messages = store.snapshot();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, MessageContent::from("stranded"));
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, MessageContent::from(FALLBACK_REPLY));
    assert!(!store.is_pending());

    // A later runtime picks the session up cleanly.
    let runtime = current_thread_runtime();
    gate.notify_one();
    let next = runtime.block_on(async {
        let reply = accepted(store.submit("again"));
        reply.settled().await.unwrap()
    });
    assert_eq!(next.content, MessageContent::from("echo: again"));
    assert_eq!(store.message_count(), 5);
}
