// Cold email generation
// Implements: upload parsing, keyword matching pipeline, prompt assembly, generation.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod upload;

#[cfg(test)]
pub mod testing;
