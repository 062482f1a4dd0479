// askql-core/src/infrastructure/adapters/openai.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::AskqlError;
use crate::infrastructure::config::{AppConfig, api_key_from_env};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::generator::SqlGenerator;

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Responses API request body.
#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesResponse {
    /// Aggregated text of every `output_text` part, in order.
    fn text(self) -> Option<String> {
        if let Some(text) = self.output_text {
            return Some(text);
        }

        let parts: Vec<String> = self
            .output
            .into_iter()
            .flat_map(|item| item.content)
            .filter(|c| c.kind == "output_text")
            .filter_map(|c| c.text)
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }
}

/// Text-generation client for the OpenAI Responses API.
pub struct OpenAiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Fails with `MissingApiKey` when `OPENAI_API_KEY` is not set.
    pub fn from_config(config: &AppConfig) -> Result<Self, InfrastructureError> {
        let api_key = api_key_from_env()?;
        Ok(Self::new(
            api_key,
            config.model.clone(),
            config.api_base_url.clone(),
        ))
    }

    async fn call_api(&self, prompt: &str) -> Result<String, InfrastructureError> {
        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&ResponsesRequest {
                model: &self.model,
                input: prompt,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(InfrastructureError::Llm(format!(
                "OpenAI API error {}: {}",
                status, body
            )));
        }

        let parsed: ResponsesResponse = serde_json::from_str(&body).map_err(|e| {
            InfrastructureError::Llm(format!("Failed to parse OpenAI response: {}", e))
        })?;

        parsed
            .text()
            .ok_or_else(|| InfrastructureError::Llm("No text in OpenAI response".to_string()))
    }
}

#[async_trait]
impl SqlGenerator for OpenAiGenerator {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt.len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, AskqlError> {
        let text = self.call_api(prompt).await?;
        debug!(completion = %text, "Model answered");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    async fn spawn_stub(router: Router) -> Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Ok(format!("http://{}/v1", addr))
    }

    #[test]
    fn test_extract_text_from_output_items() -> Result<()> {
        let body = json!({
            "id": "resp_1",
            "output": [
                {"type": "reasoning", "summary": []},
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        {"type": "output_text", "text": "SELECT COUNT(*) ", "annotations": []},
                        {"type": "output_text", "text": "FROM STUDENT;", "annotations": []}
                    ]
                }
            ]
        });
        let parsed: ResponsesResponse = serde_json::from_value(body)?;
        assert_eq!(parsed.text().as_deref(), Some("SELECT COUNT(*) FROM STUDENT;"));
        Ok(())
    }

    #[test]
    fn test_extract_text_missing() -> Result<()> {
        let parsed: ResponsesResponse = serde_json::from_value(json!({"output": []}))?;
        assert_eq!(parsed.text(), None);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_against_stub_server() -> Result<()> {
        let router = Router::new().route(
            "/v1/responses",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["model"], "gpt-4.1-mini");
                assert!(body["input"].as_str().unwrap().contains("how many"));
                Json(json!({
                    "output": [{
                        "type": "message",
                        "content": [{"type": "output_text", "text": "  select count(*) from student \n"}]
                    }]
                }))
            }),
        );
        let base_url = spawn_stub(router).await?;

        let generator = OpenAiGenerator::new("sk-test".into(), DEFAULT_MODEL.into(), base_url);
        let text = generator.generate("how many students are there").await?;

        // Trimming belongs to the pipeline, the client returns raw text.
        assert_eq!(text, "  select count(*) from student \n");
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_surfaces_api_errors() -> Result<()> {
        let router = Router::new().route(
            "/v1/responses",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
        );
        let base_url = spawn_stub(router).await?;

        let generator = OpenAiGenerator::new("bad".into(), DEFAULT_MODEL.into(), base_url);
        let err = generator.generate("anything").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"), "{message}");
        assert!(message.contains("invalid api key"), "{message}");
        Ok(())
    }
}
