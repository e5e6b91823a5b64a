// Mock interviewer: per-user session state, the turn protocol against the
// model boundary, and the HTTP handlers that expose it.
// All model calls go through llm_client::ChatModel.

pub mod controller;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod registry;
pub mod store;
