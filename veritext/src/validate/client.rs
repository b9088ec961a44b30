use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::config::ValidationConfig;
use crate::error::Result;

/// Outcome of submitting extracted text to the validation endpoint.
///
/// Only an exact HTTP 200 counts as a pass; every other status is a
/// rejection carrying the literal status code. Transport failures surface as
/// errors from [`ValidationClient::validate`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Passed,
    Rejected(u16),
}

#[derive(Debug, Serialize)]
struct ValidationRequest<'a> {
    text: &'a str,
}

#[derive(Clone, Debug)]
pub struct ValidationClient {
    client: Client,
    endpoint_url: String,
}

impl ValidationClient {
    pub fn new(config: &ValidationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Submit extracted text as `{"text": "..."}` in a single POST.
    ///
    /// No retries and no response body inspection beyond the status code.
    pub async fn validate(&self, text: &str) -> Result<ValidationOutcome> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&ValidationRequest { text })
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 200 {
            Ok(ValidationOutcome::Passed)
        } else {
            Ok(ValidationOutcome::Rejected(status.as_u16()))
        }
    }
}
