use crate::error::{Error as ErrorCli, Result};
use reqwest::{Client, Response};
use rl_core::server::payload::generate_text_request::GenerateTextRequest;
use rl_core::server::routes::{BackendApiMessage, BackendApiPing};

pub struct CliClient {
    client: Client,
    base_url_api: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url_api: format!("{}{}", base_url, "/api"),
        }
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        match res?.error_for_status() {
            Ok(res) => {
                let text = res.text().await?;
                Ok(text)
            }
            Err(e) => {
                if e.is_connect() {
                    Err(ErrorCli::ConnectionRefused(self.base_url_api.clone()))
                } else {
                    Err(ErrorCli::Http(e))
                }
            }
        }
    }

    pub async fn ping(&self) -> Result<String> {
        let url = format!(
            "{}{}",
            self.base_url_api,
            BackendApiPing::Ping.path().as_str()
        );
        let result = self.client.get(&url).send().await;
        self.handle_response(result).await
    }

    pub async fn send_prompt(&self, json: &GenerateTextRequest) -> Result<Response> {
        let url = format!(
            "{}{}",
            self.base_url_api,
            BackendApiMessage::Generate.path().as_str()
        );
        let result = self
            .client
            .post(&url)
            .json(&serde_json::json!(json))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ErrorCli::ConnectionRefused(self.base_url_api.clone())
                } else {
                    ErrorCli::Http(e)
                }
            })?
            .error_for_status()?;

        Ok(result)
    }
}
