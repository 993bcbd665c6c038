// Workflow entry point
//
// run_workflow executes exactly one chatbot turn. The only suspension point
// is the awaited agent run; multiple concurrent invocations are independent
// because each builds its own history and the agent definition is read-only.

use serde::{Deserialize, Serialize};

use stackops_core::agent::AgentDefinition;
use stackops_core::conversation::ConversationHistory;
use stackops_core::error::{Result, WorkflowError};
use stackops_core::events::{TraceSink, WorkflowEvent};
use stackops_core::runner::{AgentRunner, RunMetadata};

use crate::stack_ops::{TRACE_SOURCE, WORKFLOW_ID};

/// One user message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowInput {
    pub input_as_text: String,
}

/// The model's final text output for the turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowOutput {
    pub output_text: String,
}

/// Record an event, tolerating sink failures
///
/// The trace sink is an optional collaborator; a broken sink must never
/// abort the turn or replace the runner's own error.
async fn record(sink: &dyn TraceSink, event: WorkflowEvent) {
    if let Err(error) = sink.record(event).await {
        tracing::warn!(%error, "trace sink failed");
    }
}

/// Execute one chatbot turn
///
/// Seeds a fresh conversation with the user's text, runs the agent against
/// it, and returns the run's final output. Fails with
/// `WorkflowError::MissingOutput` if the run completes without producing
/// one; all other runner failures propagate unmodified.
pub async fn run_workflow(
    agent: &AgentDefinition,
    runner: &dyn AgentRunner,
    sink: &dyn TraceSink,
    input: WorkflowInput,
) -> Result<WorkflowOutput> {
    let metadata = RunMetadata::new(TRACE_SOURCE, WORKFLOW_ID);
    let mut history = ConversationHistory::seeded_with_user(input.input_as_text);

    record(
        sink,
        WorkflowEvent::run_started(&metadata.trace_source, &metadata.workflow_id),
    )
    .await;
    tracing::debug!(agent = %agent.name, workflow_id = %metadata.workflow_id, "running agent");

    let result = match runner.run(agent, history.items(), &metadata).await {
        Ok(result) => result,
        Err(error) => {
            record(
                sink,
                WorkflowEvent::run_failed(&metadata.workflow_id, error.to_string()),
            )
            .await;
            return Err(error);
        }
    };

    // Kept for multi-turn extension; unused further in this single-turn design
    let new_item_count = result.new_items.len();
    history.extend_raw(result.new_items);

    let Some(output_text) = result.final_output else {
        let error = WorkflowError::MissingOutput;
        record(
            sink,
            WorkflowEvent::run_failed(&metadata.workflow_id, error.to_string()),
        )
        .await;
        return Err(error);
    };

    record(
        sink,
        WorkflowEvent::run_completed(&metadata.workflow_id, new_item_count),
    )
    .await;
    tracing::debug!(
        items = history.len(),
        output_len = output_text.len(),
        "agent run finished"
    );

    Ok(WorkflowOutput { output_text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_round_trips_through_serde() {
        let input = WorkflowInput {
            input_as_text: "book a consultation".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"input_as_text": "book a consultation"}));

        let back: WorkflowInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.input_as_text, "book a consultation");
    }

    #[test]
    fn output_serializes_with_the_output_text_field() {
        let output = WorkflowOutput {
            output_text: "Sounds like an email issue".to_string(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"output_text": "Sounds like an email issue"})
        );
    }
}
