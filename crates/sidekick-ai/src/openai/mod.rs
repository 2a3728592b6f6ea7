//! OpenAI-compatible chat completions client.
//!
//! Implements the `AiClient` trait against `POST {base_url}/chat/completions`
//! with bearer authentication. Works with any server that speaks the same
//! wire format.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
