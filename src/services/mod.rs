// src/services/mod.rs
//
// Shared services module containing the model-provider gateway

pub mod openai;

// Re-export commonly used types for convenience
pub use openai::{OpenAIConfig, OpenAIService};
