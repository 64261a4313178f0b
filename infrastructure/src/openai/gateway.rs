//! OpenAI gateway
//!
//! Implements [`LlmGateway`] over the Chat Completions endpoint of the
//! configured base URL. Missing credentials surface as
//! [`GatewayError::NotConfigured`] at session creation.

use super::session::OpenAiSession;
use crate::config::{FileOpenAiConfig, FileSummaryConfig};
use async_trait::async_trait;
use pawtype_application::{GatewayError, LlmGateway, LlmSession};
use pawtype_domain::Model;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAiGateway {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    temperature: f32,
}

impl OpenAiGateway {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        temperature: f32,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            api_key,
            temperature,
        })
    }

    /// Build a gateway from the `[providers.openai]` and `[summary]` sections.
    pub fn from_config(
        provider: &FileOpenAiConfig,
        summary: &FileSummaryConfig,
    ) -> Result<Self, GatewayError> {
        Self::new(
            &provider.base_url,
            provider.resolve_api_key(),
            summary.temperature,
        )
    }

    /// Full Chat Completions URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether an API key was found; without one every session fails
    /// with [`GatewayError::NotConfigured`]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self.api_key.clone().ok_or(GatewayError::NotConfigured)?;
        debug!(model = %model, "Creating OpenAI session");

        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            self.endpoint.clone(),
            api_key,
            model.clone(),
            system_prompt.to_string(),
            self.temperature,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP reply on a local port and hand back the raw
    /// request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    /// Headers received and the body matches `content-length`
    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..head_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= head_end + 4 + content_length
    }

    fn request_body(raw: &str) -> serde_json::Value {
        let (_, body) = raw.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    async fn send_to(base_url: &str, prompt: &str) -> Result<String, GatewayError> {
        let gateway = OpenAiGateway::new(base_url, Some("sk-test".to_string()), 0.7).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::Gpt4oMini, "You are a pet analyst.")
            .await
            .unwrap();
        session.send(prompt).await
    }

    #[tokio::test]
    async fn test_success_returns_first_choice_content() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"{\"E\":\"x\"}"}}]}"#,
        )
        .await;

        let reply = send_to(&base_url, "Describe Mochi").await.unwrap();
        assert_eq!(reply, r#"{"E":"x"}"#);

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_is_request_failed() {
        let (base_url, server) = serve_once(
            "500 Internal Server Error",
            r#"{"error":{"message":"boom","type":"server_error"}}"#,
        )
        .await;

        let err = send_to(&base_url, "Describe Mochi").await.unwrap_err();
        match err {
            GatewayError::RequestFailed(message) => assert_eq!(message, "HTTP 500: boom"),
            other => panic!("unexpected error: {:?}", other),
        }

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_request_shape() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"content":"ok"}}]}"#,
        )
        .await;

        send_to(&base_url, "Describe Mochi").await.unwrap();
        let raw = server.await.unwrap();

        let request_line = raw.lines().next().unwrap();
        assert_eq!(request_line, "POST /v1/chat/completions HTTP/1.1");
        assert!(
            raw.lines()
                .any(|line| line.eq_ignore_ascii_case("authorization: Bearer sk-test"))
        );

        let body = request_body(&raw);
        assert_eq!(body["model"], "gpt-4o-mini");
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are a pet analyst.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Describe Mochi");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = OpenAiGateway::new("http://localhost:8080/", None, 0.7).unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let gateway = OpenAiGateway::new("https://api.openai.com", None, 0.7).unwrap();
        assert!(!gateway.is_configured());

        let result = gateway
            .create_session_with_system_prompt(&Model::default(), "system")
            .await;
        assert!(matches!(result, Err(GatewayError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_session_uses_requested_model() {
        let gateway =
            OpenAiGateway::new("https://api.openai.com", Some("sk-test".to_string()), 0.7)
                .unwrap();

        let session = gateway
            .create_session_with_system_prompt(&Model::Gpt4o, "system")
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::Gpt4o);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        // Port 9 (discard) on localhost is not expected to speak HTTP
        let gateway =
            OpenAiGateway::new("http://127.0.0.1:9", Some("sk-test".to_string()), 0.7).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::default(), "system")
            .await
            .unwrap();

        assert!(session.send("hello").await.is_err());
    }
}
