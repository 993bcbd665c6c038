// OpenAI agent runner
//
// Production implementation of the AgentRunner trait over OpenAI's chat
// completion API. One run is one HTTP round trip: the agent's instructions
// and the conversation items go in, the assistant reply comes back as the
// final output plus one raw item.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use stackops_core::agent::AgentDefinition;
use stackops_core::conversation::ConversationItem;
use stackops_core::error::{Result, WorkflowError};
use stackops_core::runner::{AgentRunner, RunMetadata, RunResult};

use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI agent runner
///
/// # Example
///
/// ```ignore
/// use stackops_openai::OpenAiAgentRunner;
///
/// let runner = OpenAiAgentRunner::from_env()?;
/// // or
/// let runner = OpenAiAgentRunner::new("your-api-key");
/// // or with a custom endpoint
/// let runner = OpenAiAgentRunner::with_base_url("your-api-key", "https://api.example.com/v1/chat/completions");
/// ```
#[derive(Clone)]
pub struct OpenAiAgentRunner {
    client: Client,
    api_key: String,
    api_url: String,
}

impl OpenAiAgentRunner {
    /// Create a new runner with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Create a new runner from the OPENAI_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| WorkflowError::config("OPENAI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key))
    }

    /// Create a new runner with a custom API URL (for OpenAI-compatible APIs)
    pub fn with_base_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// Get the API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Convert conversation items to OpenAI messages, instructions first
    pub(crate) fn build_messages(
        agent: &AgentDefinition,
        items: &[ConversationItem],
    ) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(agent.instructions.clone())];

        for item in items {
            match item {
                ConversationItem::User(turn) => {
                    messages.push(ChatMessage::user(turn.text()));
                }
                ConversationItem::Raw(value) => {
                    // Raw items that already look like chat messages are
                    // forwarded; anything else is opaque to this runner.
                    match serde_json::from_value::<ChatMessage>(value.clone()) {
                        Ok(message) if message.content.is_some() => messages.push(message),
                        _ => {
                            tracing::debug!("skipping raw conversation item with no message shape")
                        }
                    }
                }
            }
        }

        messages
    }

    pub(crate) fn build_request(
        agent: &AgentDefinition,
        messages: Vec<ChatMessage>,
        metadata: &RunMetadata,
    ) -> ChatRequest {
        ChatRequest {
            model: agent.model.clone(),
            messages,
            temperature: Some(agent.settings.temperature),
            top_p: Some(agent.settings.top_p),
            max_tokens: Some(agent.settings.max_tokens),
            stream: false,
            store: Some(agent.settings.store),
            metadata: Some(json!({
                "_trace_source_": metadata.trace_source,
                "workflow_id": metadata.workflow_id,
            })),
        }
    }
}

#[async_trait]
impl AgentRunner for OpenAiAgentRunner {
    async fn run(
        &self,
        agent: &AgentDefinition,
        input: &[ConversationItem],
        metadata: &RunMetadata,
    ) -> Result<RunResult> {
        let messages = Self::build_messages(agent, input);
        let request = Self::build_request(agent, messages, metadata);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| WorkflowError::runner(format!("failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(WorkflowError::runner(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| WorkflowError::runner(format!("failed to parse response: {}", e)))?;

        if let Some(usage) = &completion.usage {
            tracing::debug!(
                model = %completion.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "chat completion finished"
            );
        }

        let (final_output, new_items) = match completion.choices.into_iter().next() {
            Some(choice) => {
                let raw = serde_json::to_value(&choice.message)
                    .map_err(|e| WorkflowError::runner(format!("invalid message item: {}", e)))?;
                (choice.message.content, vec![raw])
            }
            None => (None, Vec::new()),
        };

        Ok(RunResult {
            final_output,
            new_items,
        })
    }
}

impl std::fmt::Debug for OpenAiAgentRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAgentRunner")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
