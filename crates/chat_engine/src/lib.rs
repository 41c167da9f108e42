//! Chat engine: answer-service client and wire types.
mod client;
mod types;

pub use client::{AnswerClient, ClientSettings, ReqwestAnswerClient, DEFAULT_ENDPOINT};
pub use types::{AnswerPayload, AskError, AskRequest, FailureKind, HealthStatus};
