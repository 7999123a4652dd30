use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::{FeedStore, LogStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub logs: Arc<dyn LogStore>,
    pub feed: Arc<dyn FeedStore>,
    /// Pluggable completion backend. Default: `LlmClient` against OpenAI.
    pub llm: Arc<dyn TextGenerator>,
}
