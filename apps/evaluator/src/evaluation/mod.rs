// CV evaluation pipeline.
// Implements: prompt building, tolerant response extraction, report rendering,
// artifact persistence and the per-candidate orchestration loop.
// All model calls go through llm_client::ModelInvoker.

pub mod assessment;
pub mod evaluator;
pub mod extractor;
pub mod prompts;
pub mod report;
pub mod store;
