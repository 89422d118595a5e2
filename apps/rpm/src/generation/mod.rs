// RPM content generation.
// Implements: prompt building, response schema, the generator trait and its
// Gemini backend, and the JSON API handlers.
// All LLM calls go through llm_client; nothing here talks HTTP directly.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
