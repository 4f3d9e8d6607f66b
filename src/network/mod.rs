//! HTTP networking module
//!
//! Provides the HTTP client shared by the provider adapters and the page fetcher.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::{accept_json, generate_user_agent};
