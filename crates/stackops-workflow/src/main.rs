use anyhow::Result;
use async_trait::async_trait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stackops_core::events::{TraceSink, WorkflowEvent};
use stackops_openai::OpenAiAgentRunner;
use stackops_workflow::{run_workflow, stack_ops_agent, WorkflowInput};

/// Sink that logs workflow events through tracing
struct LogTraceSink;

#[async_trait]
impl TraceSink for LogTraceSink {
    async fn record(&self, event: WorkflowEvent) -> stackops_core::error::Result<()> {
        match &event {
            WorkflowEvent::RunStarted {
                trace_source,
                workflow_id,
                ..
            } => {
                tracing::info!(%trace_source, %workflow_id, "run started");
            }
            WorkflowEvent::RunCompleted {
                workflow_id,
                new_item_count,
                ..
            } => {
                tracing::info!(%workflow_id, new_item_count, "run completed");
            }
            WorkflowEvent::RunFailed {
                workflow_id, error, ..
            } => {
                tracing::warn!(%workflow_id, %error, "run failed");
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stackops_workflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input_as_text = if args.is_empty() {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        line.trim_end_matches(['\r', '\n']).to_string()
    } else {
        args.join(" ")
    };

    let runner = OpenAiAgentRunner::from_env()?;
    let agent = stack_ops_agent();

    let output = run_workflow(
        &agent,
        &runner,
        &LogTraceSink,
        WorkflowInput { input_as_text },
    )
    .await?;

    println!("{}", output.output_text);
    Ok(())
}
