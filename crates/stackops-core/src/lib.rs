// Core types for the StackOps support chatbot workflow
//
// This crate defines the domain types shared by the workflow and the
// agent-runtime implementations:
// - Conversation items and the per-invocation history
// - The agent definition (persona + generation parameters)
// - The AgentRunner trait, the boundary to the hosted agent runtime
// - Workflow trace events and the TraceSink trait
// - Error taxonomy
//
// Key design decisions:
// - The agent runtime is strictly an external collaborator: the workflow
//   hands it a conversation and gets back a final output plus raw items
// - Items produced by the run are carried opaquely; this crate never
//   interprets model turns or tool calls
// - No persistence: every type here lives for one invocation only

pub mod agent;
pub mod conversation;
pub mod error;
pub mod events;
pub mod runner;

// Re-exports for convenience
pub use agent::{AgentDefinition, ModelSettings};
pub use conversation::{ContentPart, ConversationHistory, ConversationItem, UserTurn};
pub use error::{Result, WorkflowError};
pub use events::{InMemoryTraceSink, NoopTraceSink, TraceSink, WorkflowEvent};
pub use runner::{AgentRunner, RunMetadata, RunResult};
