use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST <endpoint>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Successful answer-service response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerPayload {
    pub answer: String,
    #[serde(default, deserialize_with = "lenient_sources")]
    pub sources: Vec<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

// Absent, null or non-array sources become empty; non-string entries are dropped.
fn lenient_sources<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let sources = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(source) => Some(source),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(sources)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AskError {
    pub kind: FailureKind,
    pub message: String,
}

impl AskError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AnswerPayload {
        serde_json::from_str(body).expect("valid payload")
    }

    #[test]
    fn missing_or_null_sources_are_empty() {
        assert!(parse(r#"{"answer":"a"}"#).sources.is_empty());
        assert!(parse(r#"{"answer":"a","sources":null}"#).sources.is_empty());
        assert!(parse(r#"{"answer":"a","sources":"https://x"}"#)
            .sources
            .is_empty());
    }

    #[test]
    fn non_string_sources_are_dropped() {
        let payload = parse(r#"{"answer":"a","sources":["https://x/a.html",null,3,"N/A"]}"#);
        assert_eq!(payload.sources, vec!["https://x/a.html", "N/A"]);
    }

    #[test]
    fn answer_is_required() {
        assert!(serde_json::from_str::<AnswerPayload>(r#"{"sources":[]}"#).is_err());
        assert!(serde_json::from_str::<AnswerPayload>(r#"{"answer":7}"#).is_err());
    }

    #[test]
    fn request_serializes_single_field() {
        let body = serde_json::to_string(&AskRequest {
            question: "What is X?",
        })
        .expect("serialize");
        assert_eq!(body, r#"{"question":"What is X?"}"#);
    }
}
