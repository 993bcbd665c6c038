// StackOps support chatbot workflow
//
// Executes exactly one chatbot turn: seed a conversation with the user's
// text, run the configured agent against it, and return the final output.
// There is no session state, no retry and no persistence; every invocation
// is independent.

pub mod stack_ops;
pub mod workflow;

// Re-exports for convenience
pub use stack_ops::{stack_ops_agent, TRACE_SOURCE, WORKFLOW_ID};
pub use workflow::{run_workflow, WorkflowInput, WorkflowOutput};
