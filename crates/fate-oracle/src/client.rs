//! The oracle HTTP client.

use serde::{Deserialize, Serialize};

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};

/// Something that can answer a game-master assistance prompt.
///
/// The TUI and CLI depend on this trait rather than the HTTP client so
/// tests can substitute a scripted assistant.
pub trait Assistant {
    /// Answer a prompt given a short table-context string (the character
    /// names currently in the room).
    fn assist(&self, prompt: &str, context: &str) -> OracleResult<String>;
}

/// One message in a chat-completions request.
#[derive(Debug, Serialize)]
struct RequestMessage {
    role: &'static str,
    content: String,
}

/// A chat-completions request body.
#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<RequestMessage>,
}

/// A chat-completions response body, reduced to what we read.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// The system instruction framing every oracle request.
fn system_instruction(context: &str) -> String {
    format!(
        "You are an assistant for a Fate RPG game master. \
         Current table: {context} \
         Keep responses concise, flavored for tabletop roleplaying, and \
         helpful regarding Fate rules (aspects, skills, stunts, stress)."
    )
}

/// Pull the reply text out of a parsed response.
fn extract_reply(response: CompletionResponse) -> OracleResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| OracleError::MalformedResponse("no choices in response".to_string()))
}

/// An [`Assistant`] backed by an OpenAI-compatible chat-completions
/// endpoint over blocking HTTP.
pub struct HttpOracle {
    config: OracleConfig,
    client: reqwest::blocking::Client,
}

impl HttpOracle {
    /// Create a client for the given configuration.
    pub fn new(config: OracleConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

impl Assistant for HttpOracle {
    fn assist(&self, prompt: &str, context: &str) -> OracleResult<String> {
        let body = CompletionRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: system_instruction(context),
                },
                RequestMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
        };

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()?
            .error_for_status()?
            .json::<CompletionResponse>()?;
        extract_reply(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_carries_context() {
        let instruction = system_instruction("Characters: Kira, Old Tom.");
        assert!(instruction.contains("Characters: Kira, Old Tom."));
        assert!(instruction.contains("Fate"));
    }

    #[test]
    fn request_body_shape() {
        let body = CompletionRequest {
            model: "llama3".to_string(),
            temperature: 0.7,
            messages: vec![RequestMessage {
                role: "user",
                content: "hello".to_string(),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn extract_reply_takes_first_choice() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "Roll Provoke."}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(response).unwrap(), "Roll Provoke.");
    }

    #[test]
    fn extract_reply_rejects_empty_choices() {
        let response: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_reply(response),
            Err(OracleError::MalformedResponse(_))
        ));
    }

    #[test]
    fn scripted_assistant_via_trait() {
        struct Scripted;
        impl Assistant for Scripted {
            fn assist(&self, prompt: &str, _context: &str) -> OracleResult<String> {
                Ok(format!("echo: {prompt}"))
            }
        }
        let oracle: &dyn Assistant = &Scripted;
        assert_eq!(oracle.assist("hi", "").unwrap(), "echo: hi");
    }
}
