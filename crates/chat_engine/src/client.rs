use std::time::Duration;

use chat_logging::{chat_debug, chat_info};
use url::Url;

use crate::{AnswerPayload, AskError, AskRequest, FailureKind, HealthStatus};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/ask";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// `None` leaves the request unbounded; only the transport can fail it.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait AnswerClient: Send + Sync {
    async fn ask(&self, question: &str) -> Result<AnswerPayload, AskError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnswerClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestAnswerClient {
    pub fn new(settings: ClientSettings) -> Result<Self, AskError> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|err| AskError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AskError::new(
                FailureKind::InvalidUrl,
                format!("unsupported scheme {}", endpoint.scheme()),
            ));
        }

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AskError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Probes the service's `health` route, a sibling of the ask endpoint.
    pub async fn check_health(&self) -> Result<(), AskError> {
        let health_url = self
            .endpoint
            .join("health")
            .map_err(|err| AskError::new(FailureKind::InvalidUrl, err.to_string()))?;
        chat_debug!("Probing answer service health at {}", health_url);

        let response = self
            .client
            .get(health_url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = read_success_body(response).await?;
        let health: HealthStatus = serde_json::from_slice(&body)
            .map_err(|err| AskError::new(FailureKind::MalformedBody, err.to_string()))?;
        if health.status == "ok" {
            Ok(())
        } else {
            Err(AskError::new(
                FailureKind::MalformedBody,
                format!("service reported status {:?}", health.status),
            ))
        }
    }
}

#[async_trait::async_trait]
impl AnswerClient for ReqwestAnswerClient {
    async fn ask(&self, question: &str) -> Result<AnswerPayload, AskError> {
        chat_info!(
            "POST {} question_len={}",
            self.endpoint,
            question.len()
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body = read_success_body(response).await?;
        let payload: AnswerPayload = serde_json::from_slice(&body)
            .map_err(|err| AskError::new(FailureKind::MalformedBody, err.to_string()))?;
        chat_debug!(
            "Answer received answer_len={} sources={}",
            payload.answer.len(),
            payload.sources.len()
        );
        Ok(payload)
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<Vec<u8>, AskError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AskError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    Ok(bytes.to_vec())
}

fn map_reqwest_error(err: reqwest::Error) -> AskError {
    if err.is_timeout() {
        return AskError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return AskError::new(FailureKind::InvalidUrl, err.to_string());
    }
    AskError::new(FailureKind::Network, err.to_string())
}
