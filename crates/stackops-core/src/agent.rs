// Agent definition
//
// AgentDefinition is the immutable value that defines the chatbot's behavior
// for every invocation: persona name, instruction text, model identifier, and
// generation parameters. It is built once at process start and shared by
// reference across concurrent invocations.

use serde::{Deserialize, Serialize};

/// Generation parameters for the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Sampling temperature (typically 0.0 - 2.0)
    pub temperature: f32,

    /// Nucleus-sampling threshold (0.0 - 1.0)
    pub top_p: f32,

    /// Maximum tokens to generate per response
    pub max_tokens: u32,

    /// Whether the remote service should retain the run
    pub store: bool,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 1.0,
            max_tokens: 2048,
            store: true,
        }
    }
}

/// Immutable definition of a persona-configured agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Persona name
    pub name: String,

    /// Instruction text (free-form policy, not parsed or validated here)
    pub instructions: String,

    /// Model identifier (e.g., "gpt-3.5-turbo")
    pub model: String,

    /// Generation parameters
    pub settings: ModelSettings,
}

impl AgentDefinition {
    /// Create a new agent definition with default settings
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model: model.into(),
            settings: ModelSettings::default(),
        }
    }

    /// Set the generation parameters
    pub fn with_settings(mut self, settings: ModelSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.settings.temperature = temperature;
        self
    }

    /// Set the nucleus-sampling threshold
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.settings.top_p = top_p;
        self
    }

    /// Set the max output tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.settings.max_tokens = max_tokens;
        self
    }

    /// Set whether the remote service retains the run
    pub fn with_store(mut self, store: bool) -> Self {
        self.settings.store = store;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods_set_settings() {
        let agent = AgentDefinition::new("Stack Ops", "Be concise.", "gpt-3.5-turbo")
            .with_temperature(1.0)
            .with_top_p(1.0)
            .with_max_tokens(2048)
            .with_store(true);

        assert_eq!(agent.model, "gpt-3.5-turbo");
        assert_eq!(
            agent.settings,
            ModelSettings {
                temperature: 1.0,
                top_p: 1.0,
                max_tokens: 2048,
                store: true,
            }
        );
    }
}
