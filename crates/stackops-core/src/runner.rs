// AgentRunner - the boundary to the hosted agent runtime
//
// The runtime is consumed, not implemented: it accepts an agent definition
// and a conversation-item sequence and returns a final textual output (or
// none) plus the raw items the run produced. Transport, prompt execution,
// tool calling and tracing all live on the other side of this trait.

use async_trait::async_trait;

use crate::agent::AgentDefinition;
use crate::conversation::ConversationItem;
use crate::error::Result;

/// Observability metadata attached to a run
///
/// Both fields are opaque tokens forwarded to the external service; nothing
/// in this system interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    /// Fixed tag identifying the producing tool
    pub trace_source: String,

    /// Static workflow identifier
    pub workflow_id: String,
}

impl RunMetadata {
    /// Create run metadata
    pub fn new(trace_source: impl Into<String>, workflow_id: impl Into<String>) -> Self {
        Self {
            trace_source: trace_source.into(),
            workflow_id: workflow_id.into(),
        }
    }
}

/// Outcome of one agent run
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// The run's concluding textual response, if any
    pub final_output: Option<String>,

    /// Raw items the run produced (model turns, tool calls), carried opaquely
    pub new_items: Vec<serde_json::Value>,
}

impl RunResult {
    /// Create a result with a final output and no extra items
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            final_output: Some(output.into()),
            new_items: Vec::new(),
        }
    }
}

/// Trait for agent runtimes
///
/// Implementations handle provider-specific API calls and response parsing.
/// Failures surface as opaque `WorkflowError::Runner` values; no retry or
/// backoff happens at this boundary.
#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Execute one run of the agent against the given conversation
    async fn run(
        &self,
        agent: &AgentDefinition,
        input: &[ConversationItem],
        metadata: &RunMetadata,
    ) -> Result<RunResult>;
}
