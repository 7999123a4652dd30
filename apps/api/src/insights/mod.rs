// Model-derived insights for a daily log: the day score and the reflection feed.
// All completion calls go through llm_client; no direct HTTP calls here.

pub mod feed;
pub mod handlers;
pub mod prompts;
pub mod scoring;
