//! HTTP client for the enquiry endpoint
//!
//! Posts the enquiry as JSON. No request timeout and no retry: a request
//! that never completes leaves the form submitting.

use super::traits::EnquirySubmitter;
use crate::enquiry::EnquiryRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Client for the academy's enquiry endpoint
#[derive(Debug, Clone)]
pub struct EnquiryClient {
    http: Client,
    endpoint: String,
}

impl EnquiryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EnquirySubmitter for EnquiryClient {
    async fn submit(&self, record: &EnquiryRecord) -> Result<bool> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Enquiry endpoint answered {status}");
        }
        Ok(status.is_success())
    }
}
