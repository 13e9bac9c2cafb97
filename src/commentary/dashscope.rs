//! DashScope text-generation client
//!
//! Sends one blocking request per prompt to the native DashScope generation
//! endpoint with `result_format = "message"`. Replies are read from
//! `output.choices[0].message.content`.

use super::traits::{TextGenerator, FALLBACK_ERROR, FALLBACK_UNAVAILABLE};
use anyhow::{Context, Result};
use rand::Rng;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Native text-generation endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "qwen-turbo";

/// Why a single generation request failed
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request {request_id} failed with status {status}: {code} {message}")]
    Status {
        status: u16,
        request_id: String,
        code: String,
        message: String,
    },

    #[error("response contained no message content")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: RequestInput<'a>,
    parameters: RequestParameters,
}

#[derive(Debug, Serialize)]
struct RequestInput<'a> {
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct RequestParameters {
    result_format: &'static str,
    seed: u32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    output: Option<ResponseOutput>,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseOutput {
    #[serde(default)]
    choices: Vec<ResponseChoice>,
}

#[derive(Debug, Deserialize)]
struct ResponseChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl GenerationResponse {
    fn into_content(self) -> Option<String> {
        self.output?
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}

/// Blocking client for the DashScope generation API
#[derive(Debug, Clone)]
pub struct DashScopeClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl DashScopeClient {
    /// Create a client with the default endpoint and model
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Use a different endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt and return the reply, surfacing every failure
    pub fn request(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerationRequest {
            model: &self.model,
            input: RequestInput {
                messages: vec![RequestMessage {
                    role: "user",
                    content: prompt,
                }],
            },
            parameters: RequestParameters {
                result_format: "message",
                seed: rand::thread_rng().gen_range(1..=10000),
            },
        };

        log::debug!("Requesting commentary from {} ({})", self.endpoint, self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let reply: GenerationResponse = response.json().unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                request_id: reply.request_id.unwrap_or_default(),
                code: reply.code.unwrap_or_default(),
                message: reply.message.unwrap_or_default(),
            });
        }

        let reply: GenerationResponse = response.json()?;
        reply.into_content().ok_or(GenerationError::EmptyResponse)
    }
}

impl TextGenerator for DashScopeClient {
    fn generate(&self, prompt: &str) -> String {
        match self.request(prompt) {
            Ok(content) => content,
            Err(e @ GenerationError::Status { .. }) => {
                log::warn!("Text generation rejected: {}", e);
                FALLBACK_UNAVAILABLE.to_string()
            }
            Err(e) => {
                log::warn!("Text generation failed: {}", e);
                FALLBACK_ERROR.to_string()
            }
        }
    }
}
