//! HTTP client for the remote answer service.
//!
//! Sends `POST {"query": ...}` to the ask endpoint and decodes the
//! `answer` field of the JSON reply.

mod api;
mod client;
mod config;

pub use client::HttpAnswerClient;
pub use config::RemoteConfig;
