//! HTTP client for the content suggestion service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use flashcard_core::{SuggestionError, SuggestionService};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionRequest<'a> {
    card_content: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    suggestions: Vec<String>,
}

/// Posts card text to a suggestion endpoint.
///
/// The endpoint takes `{"cardContent": "..."}` and answers with
/// `{"suggestions": ["..."]}`.
#[derive(Debug, Clone)]
pub struct HttpSuggestionService {
    client: Client,
    endpoint: String,
}

impl HttpSuggestionService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SuggestionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestionError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Use a preconfigured client, e.g. one with custom proxy settings.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionService for HttpSuggestionService {
    async fn suggest(&self, content: &str) -> Result<Vec<String>, SuggestionError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&SuggestionRequest {
                card_content: content,
            })
            .send()
            .await
            .map_err(|e| SuggestionError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SuggestionError::Backend { status, message });
        }

        let response: SuggestionResponse = resp
            .json()
            .await
            .map_err(|e| SuggestionError::Parse(e.to_string()))?;

        Ok(response.suggestions)
    }
}
