//! Answer payloads returned by the remote service.

use serde_json::Value;

use crate::message::MessageContent;
use crate::AnswerUnavailable;

/// Assistant text recorded when no answer could be obtained.
pub const FALLBACK_REPLY: &str = "Error connecting to backend.";

/// The `answer` field of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    /// A sequence of structured items, shown one per line.
    Items(Vec<Value>),
    /// Any other JSON value, kept verbatim.
    Other(Value),
}

impl Answer {
    /// Extract the answer from a decoded response body.
    ///
    /// A body that is not an object, or whose `answer` is absent or
    /// `null`, has no answer.
    pub fn from_body(body: Value) -> Result<Self, AnswerUnavailable> {
        let Value::Object(mut fields) = body else {
            return Err(AnswerUnavailable::MissingAnswer);
        };
        match fields.remove("answer") {
            None | Some(Value::Null) => Err(AnswerUnavailable::MissingAnswer),
            Some(Value::String(text)) => Ok(Answer::Text(text)),
            Some(Value::Array(items)) => Ok(Answer::Items(items)),
            Some(other) => Ok(Answer::Other(other)),
        }
    }

    /// Content of the assistant message built from this answer.
    ///
    /// Items are serialized to compact JSON and joined with `\n`.
    pub fn into_content(self) -> MessageContent {
        match self {
            Answer::Text(text) => MessageContent::Text(text),
            Answer::Items(items) => MessageContent::Text(
                items
                    .iter()
                    .map(Value::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Answer::Other(value) => MessageContent::Structured(value),
        }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}
