use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::application::ports::{AdvisorClient, AdvisorClientError};
use crate::domain::{AdviceReply, ChatTurn};
use crate::presentation::config::ClientSettings;

/// Calls the advisor endpoint over HTTP, as the browser client would.
pub struct HttpAdvisorClient {
    client: Client,
    advisor_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct AdviceRequest<'a> {
    messages: &'a [ChatTurn],
}

impl HttpAdvisorClient {
    pub fn new(advisor_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            advisor_url,
            api_key,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.advisor_url.clone(), settings.api_key.clone())
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request
                .header("apikey", &self.api_key)
                .header("Authorization", format!("Bearer {}", self.api_key))
        }
    }
}

#[async_trait]
impl AdvisorClient for HttpAdvisorClient {
    #[tracing::instrument(skip(self, messages), fields(url = %self.advisor_url, messages = messages.len()))]
    async fn advise(&self, messages: &[ChatTurn]) -> Result<AdviceReply, AdvisorClientError> {
        let request = self
            .client
            .post(&self.advisor_url)
            .json(&AdviceRequest { messages });

        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| AdvisorClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => return Err(AdvisorClientError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => return Err(AdvisorClientError::QuotaExhausted),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(status = s.as_u16(), body = %body, "Advisor returned an error");
                return Err(AdvisorClientError::Failed {
                    status: s.as_u16(),
                });
            }
            _ => {}
        }

        response.json::<AdviceReply>().await.map_err(|e| {
            tracing::warn!(error = %e, "Advisor reply could not be decoded");
            AdvisorClientError::Failed {
                status: status.as_u16(),
            }
        })
    }
}
