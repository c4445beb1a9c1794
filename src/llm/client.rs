use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Anything that can turn a single prompt into a text completion
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Configuration for the OpenAI chat-completions client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key (from OPENAI_API_KEY env var)
    pub api_key: String,
    /// Model to use (e.g., "gpt-4o-mini")
    pub model: String,
    /// Base URL, without the trailing /chat/completions
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f64,
}

impl OpenAiConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key/value source
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key =
            get("OPENAI_API_KEY").context("OPENAI_API_KEY not found in environment variables")?;
        if api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY is set but empty");
        }

        let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let temperature = match get("OPENAI_TEMPERATURE") {
            Some(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("OPENAI_TEMPERATURE is not a number: {}", raw))?,
            None => DEFAULT_TEMPERATURE,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            temperature,
        })
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// OpenAI API client
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a single user message and return the reply text
    pub async fn send_message(&self, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: Some(self.config.temperature),
            messages: vec![Message {
                role: "user".to_string(),
                content: user.to_string(),
            }],
        };

        debug!(
            "Sending {} prompt chars to {}",
            user.len(),
            self.config.model
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error: {} - {}", status, body);
        }

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI API response")?;

        extract_text(response)
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.send_message(prompt).await
    }
}

/// Pull the text out of the first choice
fn extract_text(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.trim().is_empty())
        .context("No text content in response")
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
