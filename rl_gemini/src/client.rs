use crate::error::{Error, Result};
use crate::request::GenerateContentRequest;
use crate::stream::sse_text_fragments;
use reqwest::Client;
use rl_core::types::message::Message;
use std::env;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error};

/// Hosted model every relay request targets.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini `streamGenerateContent` API.
///
/// Cheap to clone; holds a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        let client = Client::new();
        GeminiClient {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client from `GEMINI_API_KEY`, with an optional
    /// `GEMINI_BASE_URL` override for proxies and tests.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| Error::MissingApiKey)?;
        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(GeminiClient::new(&api_key, DEFAULT_MODEL, &base_url))
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Submits the ordered messages and returns the reply as a stream of
    /// text fragments in provider emission order. Consumed exactly once;
    /// not restartable.
    ///
    /// # Errors
    /// Fails on transport errors and on a non-success status before the
    /// stream is established. Mid-stream failures surface as `Err` items.
    pub async fn stream_generate_content(
        &self,
        messages: &[Message],
    ) -> Result<ReceiverStream<Result<String>>> {
        let url = format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        );
        let request = GenerateContentRequest::from_messages(messages);

        debug!(
            model = %self.model,
            message_count = request.contents.len(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "Gemini API error");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let rx = sse_text_fragments(response.bytes_stream());
        Ok(ReceiverStream::new(rx))
    }
}
