//! OpenAI chat session
//!
//! Each `send` is one stateless Chat Completions call carrying the system
//! prompt and the user message.

use super::protocol::{ChatMessage, ChatRequest, ChatResponse, error_message};
use async_trait::async_trait;
use pawtype_application::{GatewayError, LlmSession};
use pawtype_domain::Model;
use reqwest::Client;
use tracing::debug;

pub struct OpenAiSession {
    client: Client,
    endpoint: String,
    api_key: String,
    model: Model,
    system_prompt: String,
    temperature: f32,
}

impl OpenAiSession {
    pub fn new(
        client: Client,
        endpoint: String,
        api_key: String,
        model: Model,
        system_prompt: String,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
            system_prompt,
            temperature,
        }
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: self.model.as_str(),
            messages: vec![
                ChatMessage::system(&self.system_prompt),
                ChatMessage::user(content),
            ],
            temperature: self.temperature,
        };

        debug!(model = %self.model, endpoint = %self.endpoint, "Calling Chat Completions API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_message(&body)
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        body.into_text()
    }
}
