//! OpenRouter LLM session implementation

use super::error::OpenRouterError;
use super::gateway::OpenRouterSettings;
use super::types::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use visa_advisor_application::{GatewayError, LlmSession};
use visa_advisor_domain::Model;

/// One system prompt bound to one model.
///
/// The chat API is stateless and every `send` is a fresh single-turn
/// exchange; no history is kept between calls.
pub struct OpenRouterSession {
    client: reqwest::Client,
    settings: Arc<OpenRouterSettings>,
    model: Model,
    system_prompt: String,
}

impl OpenRouterSession {
    pub(super) fn new(
        client: reqwest::Client,
        settings: Arc<OpenRouterSettings>,
        model: Model,
        system_prompt: String,
    ) -> Self {
        Self {
            client,
            settings,
            model,
            system_prompt,
        }
    }

    async fn complete(&self, content: &str) -> Result<String, OpenRouterError> {
        let mut messages = Vec::with_capacity(2);
        if !self.system_prompt.is_empty() {
            messages.push(ChatMessage::system(&self.system_prompt));
        }
        messages.push(ChatMessage::user(content));

        let request = ChatRequest {
            model: self.model.as_str(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!(model = %self.model, "Calling chat completions API");

        let response = self
            .client
            .post(self.settings.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenRouterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        if let Some(error) = body.error {
            return Err(OpenRouterError::Api(error.message));
        }

        Ok(body.into_first_content())
    }
}

#[async_trait]
impl LlmSession for OpenRouterSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.complete(content).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::openrouter::OpenRouterGateway;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;
    use visa_advisor_application::LlmGateway;

    /// Serve exactly one HTTP response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
        });

        (format!("http://{}/api/v1", addr), rx)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn gateway(base_url: String) -> OpenRouterGateway {
        OpenRouterGateway::new(OpenRouterSettings {
            api_key: "sk-or-test".to_string(),
            base_url,
            referer: "https://localhost:3000".to_string(),
            title: "UK Global Talent Visa Assistant".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_chat_completion() {
        let (base_url, request_rx) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"Apply via Tech Nation."}}]}"#,
        )
        .await;

        let session = gateway(base_url)
            .create_session_with_system_prompt(&Model::GptOss20bFree, "You are an advisor.")
            .await
            .unwrap();
        let reply = session.send("How do I apply?").await.unwrap();
        assert_eq!(reply, "Apply via Tech Nation.");

        let request = request_rx.await.unwrap();
        let lower = request.to_lowercase();
        assert!(request.starts_with("POST /api/v1/chat/completions"));
        assert!(lower.contains("authorization: bearer sk-or-test"));
        assert!(lower.contains("http-referer: https://localhost:3000"));
        assert!(lower.contains("x-title: uk global talent visa assistant"));

        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["model"], "openai/gpt-oss-20b:free");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "You are an advisor.");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "How do I apply?");
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_gateway_error() {
        let (base_url, _rx) = serve_once(
            "HTTP/1.1 429 Too Many Requests",
            r#"{"error":{"message":"Rate limit exceeded"}}"#,
        )
        .await;

        let session = gateway(base_url)
            .create_session_with_system_prompt(&Model::Gemini20FlashExpFree, "sys")
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::RateLimited(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_return_empty_content() {
        let (base_url, _rx) = serve_once("HTTP/1.1 200 OK", r#"{"choices":[]}"#).await;

        let session = gateway(base_url)
            .create_session_with_system_prompt(&Model::DeepseekChatV31Free, "sys")
            .await
            .unwrap();
        assert_eq!(session.send("hi").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_error_body_on_success_status_fails() {
        let (base_url, _rx) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"error":{"message":"Provider returned error","code":502}}"#,
        )
        .await;

        let session = gateway(base_url)
            .create_session_with_system_prompt(&Model::GptOss20bFree, "sys")
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed(ref m) if m == "Provider returned error"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let session = gateway(format!("http://{}", addr))
            .create_session_with_system_prompt(&Model::GptOss20bFree, "sys")
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
