// Workflow trace events
//
// WorkflowEvent tracks the lifecycle of one chatbot turn. Events are handed
// to a TraceSink, an optional cross-cutting collaborator: the default sink
// does nothing, the in-memory sink collects events for tests, and binaries
// can log them via tracing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;

/// Events emitted during workflow execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorkflowEvent {
    /// Agent run started
    RunStarted {
        trace_source: String,
        workflow_id: String,
        timestamp: DateTime<Utc>,
    },

    /// Agent run completed with a final output
    RunCompleted {
        workflow_id: String,
        new_item_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// Agent run failed
    RunFailed {
        workflow_id: String,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl WorkflowEvent {
    /// Create a run started event
    pub fn run_started(trace_source: impl Into<String>, workflow_id: impl Into<String>) -> Self {
        WorkflowEvent::RunStarted {
            trace_source: trace_source.into(),
            workflow_id: workflow_id.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a run completed event
    pub fn run_completed(workflow_id: impl Into<String>, new_item_count: usize) -> Self {
        WorkflowEvent::RunCompleted {
            workflow_id: workflow_id.into(),
            new_item_count,
            timestamp: Utc::now(),
        }
    }

    /// Create a run failed event
    pub fn run_failed(workflow_id: impl Into<String>, error: impl Into<String>) -> Self {
        WorkflowEvent::RunFailed {
            workflow_id: workflow_id.into(),
            error: error.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving workflow trace events
#[async_trait]
pub trait TraceSink: Send + Sync {
    /// Record a single event
    async fn record(&self, event: WorkflowEvent) -> Result<()>;
}

/// Sink that discards all events
#[derive(Debug, Default, Clone)]
pub struct NoopTraceSink;

impl NoopTraceSink {
    /// Create a no-op sink
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TraceSink for NoopTraceSink {
    async fn record(&self, _event: WorkflowEvent) -> Result<()> {
        Ok(())
    }
}

/// Sink that collects events in memory
///
/// Useful for tests that assert on the emitted trace.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTraceSink {
    events: Arc<RwLock<Vec<WorkflowEvent>>>,
}

impl InMemoryTraceSink {
    /// Create an in-memory sink
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All recorded events, in order
    pub async fn events(&self) -> Vec<WorkflowEvent> {
        self.events.read().await.clone()
    }

    /// Clear recorded events
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl TraceSink for InMemoryTraceSink {
    async fn record(&self, event: WorkflowEvent) -> Result<()> {
        self.events.write().await.push(event);
        Ok(())
    }
}
