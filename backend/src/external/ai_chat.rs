//! Chat completion client for explaining recommendations
//!
//! Talks to an OpenAI-style chat completion endpoint (Inflection AI) with
//! bearer-token auth. A malformed success response is absorbed into a fixed
//! fallback string rather than failing the request, since the explanation is
//! a non-critical enrichment step.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Returned when the provider's response does not contain a reply
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

const SYSTEM_PROMPT: &str =
    "You are a helpful farming assistant that explains recommendations clearly.";

/// Chat completion API client
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

impl ChatClient {
    /// Create a new ChatClient with an explicit request timeout
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// Ask the assistant a question with a free-form context document.
    ///
    /// Non-2xx responses are propagated as [`AppError::ChatApi`]; a 2xx
    /// response missing `choices[0].message.content` degrades to
    /// [`FALLBACK_REPLY`].
    pub async fn ask(&self, question: &str, context: &Value) -> AppResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("{}\n\nContext: {}", question, context),
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ChatApi { status, body });
        }

        let data: Value = response.json().await?;

        Ok(extract_reply(&data)
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_REPLY.to_string()))
    }
}

/// Extract `choices[0].message.content` from a chat completion response
fn extract_reply(data: &Value) -> Option<&str> {
    data.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_choice_content() {
        let data = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Water early in the morning."}},
                {"message": {"role": "assistant", "content": "Second choice"}}
            ]
        });

        assert_eq!(extract_reply(&data), Some("Water early in the morning."));
    }

    #[test]
    fn missing_choices_key_yields_none() {
        let data = json!({"error": "rate limited"});
        assert_eq!(extract_reply(&data), None);
    }

    #[test]
    fn empty_choices_list_yields_none() {
        let data = json!({"choices": []});
        assert_eq!(extract_reply(&data), None);
    }

    #[test]
    fn non_string_content_yields_none() {
        let data = json!({"choices": [{"message": {"content": 42}}]});
        assert_eq!(extract_reply(&data), None);
    }
}
