use super::http_client::build_report_client;
use super::payload::ReportPayload;
use crate::config::Config;
use crate::error::SubmissionError;
use async_trait::async_trait;
use reqwest::Client;

/// Where a gathered report is delivered.
///
/// Returns the HTTP status code on any response; `Err` only when no response
/// was received at all.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn submit(&self, payload: &ReportPayload) -> Result<u16, SubmissionError>;
}

/// POSTs the payload form-encoded to `{endpoint}/irc`.
pub struct HttpReportSink {
    url: String,
    client: Client,
}

impl HttpReportSink {
    pub const ROUTE: &'static str = "irc";

    pub fn new(endpoint: &str, verify_tls: bool) -> Self {
        let url = format!("{}/{}", endpoint.trim_end_matches('/'), Self::ROUTE);
        if !verify_tls {
            tracing::warn!(url = %url, "TLS certificate verification disabled for report endpoint");
        }
        Self {
            url,
            client: build_report_client(verify_tls),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint(), config.verify_tls())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ReportSink for HttpReportSink {
    async fn submit(&self, payload: &ReportPayload) -> Result<u16, SubmissionError> {
        let resp = self
            .client
            .post(&self.url)
            .form(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            tracing::debug!(
                url = %self.url,
                %status,
                body = %body,
                "report endpoint rejected submission"
            );
        }
        Ok(status.as_u16())
    }
}
