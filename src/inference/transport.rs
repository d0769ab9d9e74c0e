use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::app::{models::api_error::ApiError, util};

/// Performs a single JSON POST and hands back the status plus the decoded body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<(StatusCode, Value), ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<(StatusCode, Value), ApiError> {
        util::reqwest::post_json(&self.client, url, payload).await
    }
}
