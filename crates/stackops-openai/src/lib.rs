// OpenAI Runner Implementation
//
// This crate provides the production AgentRunner implementation over
// OpenAI's chat completion API. The agent's instruction text becomes the
// system message, user turns become user messages, and the assistant reply
// is returned as the run's final output plus one raw item.

mod driver;
mod types;


pub use driver::OpenAiAgentRunner;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage};

// Re-export the core trait for convenience
pub use stackops_core::runner::AgentRunner;
