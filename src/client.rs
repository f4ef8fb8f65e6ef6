use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmSettings;

/// Contract the planner depends on: send one chat completion request,
/// get one reply. Keeps the wire client swappable in tests.
#[async_trait]
pub trait LlmClient {
    async fn chat_completion(&self, request: ChatCompletionRequest)
    -> Result<ChatCompletionResponse>;
}

pub type DynLlmClient = dyn LlmClient + Send + Sync;

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    base_url: String,
    api_token: String,
    user_agent: String,
}

impl ChatClient {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let base_url = settings.endpoint.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("Endpoint URL cannot be empty"));
        }

        let timeout = Duration::from_secs(settings.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            api_token: settings.api_token.clone(),
            user_agent: settings.user_agent.clone(),
        })
    }
}

#[async_trait]
impl LlmClient for ChatClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .header("User-Agent", &self.user_agent)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to chat completions endpoint")?;

        match response.status() {
            reqwest::StatusCode::OK => response
                .json::<ChatCompletionResponse>()
                .await
                .context("Failed to parse chat completion response JSON"),
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                let error_msg = if error_text.contains("per second") {
                    "Rate limit exceeded. Please wait a moment and try again."
                } else {
                    "Too many requests. Please wait before trying again."
                };
                Err(anyhow!("{} (API response: {})", error_msg, error_text))
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(anyhow!(
                "Invalid API token. Please check your API token configuration."
            )),
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
                Err(anyhow!(
                    "Planner endpoint is temporarily unavailable. Please try again later."
                ))
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("API error (status {}): {}", status, error_text))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn sample_settings(base_url: String) -> LlmSettings {
        LlmSettings {
            api_token: "test-token".to_string(),
            endpoint: base_url,
            timeout_secs: 30,
            user_agent: "autoplan/test".to_string(),
        }
    }

    #[tokio::test]
    async fn chat_completion_successfully_parses_response() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .header("Authorization", "Bearer test-token")
                    .json_body(json!({
                        "model": "test-model",
                        "messages": [
                            {"role": "user", "content": "Hello"}
                        ],
                        "max_tokens": 128,
                        "temperature": 0.2
                    }));

                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "choices": [
                            {
                                "index": 0,
                                "finish_reason": "stop",
                                "message": {
                                    "role": "assistant",
                                    "content": "Hi there!"
                                }
                            }
                        ]
                    }));
            })
            .await;

        let client = ChatClient::new(&sample_settings(server.url("/v1"))).unwrap();

        let response = client
            .chat_completion(ChatCompletionRequest {
                model: "test-model".into(),
                messages: vec![ChatMessage {
                    role: ChatMessageRole::User,
                    content: "Hello".into(),
                }],
                max_tokens: Some(128),
                temperature: Some(0.2),
            })
            .await
            .unwrap();

        assert_eq!(response.choices.len(), 1);
        let choice = &response.choices[0];
        assert_eq!(choice.finish_reason.as_deref(), Some("stop"));
        assert_eq!(choice.message.content, "Hi there!");

        _mock.assert_async().await;
    }

    #[tokio::test]
    async fn chat_completion_returns_error_for_http_failure() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(401)
                    .header("Content-Type", "application/json")
                    .body(r#"{"error":"invalid_api_token"}"#);
            })
            .await;

        let client = ChatClient::new(&sample_settings(server.url("/v1"))).unwrap();

        let err = client
            .chat_completion(ChatCompletionRequest {
                model: "test-model".into(),
                messages: vec![ChatMessage {
                    role: ChatMessageRole::User,
                    content: "Hello".into(),
                }],
                max_tokens: None,
                temperature: None,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid API token"));

        _mock.assert_async().await;
    }

    #[test]
    fn new_rejects_empty_endpoint() {
        let err = ChatClient::new(&sample_settings(String::new())).unwrap_err();
        assert!(err.to_string().contains("Endpoint URL cannot be empty"));
    }
}
