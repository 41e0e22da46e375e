//! HTTP client for the job service
//!
//! Implements [`JobSource`] over the `GET {base}/jobs` and
//! `DELETE {base}/jobs/{id}` endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ApiConfig;
use crate::record::{parse_collection, JobRecord, RecordId};
use crate::sync::{JobSource, NetworkError};

/// Job service client
pub struct HttpJobSource {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpJobSource {
    /// Create a client from the `[api]` config section
    pub fn new(config: &ApiConfig) -> Result<Self, NetworkError> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn jobs_url(&self) -> String {
        format!("{}/jobs", self.base_url)
    }

    pub fn job_url(&self, id: RecordId) -> String {
        format!("{}/jobs/{}", self.base_url, id)
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_all(&self) -> Result<Option<Vec<JobRecord>>, NetworkError> {
        let url = self.jobs_url();
        tracing::debug!(url = %url, "Fetching jobs");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_collection(&body)
    }

    async fn delete(&self, id: RecordId) -> Result<(), NetworkError> {
        let url = self.job_url(id);
        tracing::debug!(id, url = %url, "Deleting job");

        let response = self
            .http_client
            .delete(&url)
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(delete_status_error(id, status, body))
    }
}

fn decode_collection(body: &str) -> Result<Option<Vec<JobRecord>>, NetworkError> {
    parse_collection(body).map_err(|e| NetworkError::Decode(e.to_string()))
}

fn delete_status_error(id: RecordId, status: StatusCode, body: String) -> NetworkError {
    if status == StatusCode::NOT_FOUND {
        NetworkError::NotFound(id)
    } else {
        NetworkError::Status {
            status: status.as_u16(),
            body,
        }
    }
}
