//! Chat Completions wire types
//!
//! Only the fields pawtype sends or reads are modelled; unknown response
//! fields are ignored.

use pawtype_application::GatewayError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn system(content: &'a str) -> Self {
        Self {
            role: "system",
            content,
        }
    }

    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn into_text(self) -> Result<String, GatewayError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::InvalidResponse("No message content in reply".to_string()))
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Best-effort message for a failed request: the API's own message when the
/// body has one, otherwise the raw body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
            temperature: 0.7,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_first_choice_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"E\":\"Friendly\"}"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().unwrap(), r#"{"E":"Friendly"}"#);
    }

    #[test]
    fn test_empty_choices_is_invalid() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            response.into_text(),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_null_content_is_invalid() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(error_message(body), "Incorrect API key provided");
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
    }
}
