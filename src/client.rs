//! Alert fetcher
//!
//! One GET per call against `<api_url><code>`. No retry, no backoff.

use async_trait::async_trait;
use tracing::debug;

use crate::config::Settings;
use crate::error::AlertsError;
use crate::models::AlertsResponse;

/// Anything that can answer "what alerts are active for this code"
#[async_trait]
pub trait AlertsSource: Send + Sync {
    async fn fetch_alerts(&self, code: &str) -> Result<AlertsResponse, AlertsError>;
}

#[async_trait]
impl<T: AlertsSource + ?Sized> AlertsSource for Box<T> {
    async fn fetch_alerts(&self, code: &str) -> Result<AlertsResponse, AlertsError> {
        (**self).fetch_alerts(code).await
    }
}

pub struct AlertsClient {
    base_url: String,
    client: reqwest::Client,
}

impl AlertsClient {
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: settings.api_url.clone(),
            client: builder.build()?,
        })
    }

    /// Plain concatenation; the code is not URL-encoded.
    pub fn alerts_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}

#[async_trait]
impl AlertsSource for AlertsClient {
    async fn fetch_alerts(&self, code: &str) -> Result<AlertsResponse, AlertsError> {
        let url = self.alerts_url(code);
        debug!(%url, "requesting active alerts");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AlertsError::Transport {
                status: status.as_u16(),
                reason: reason_phrase(&response),
            });
        }

        let body = response.text().await?;
        let alerts: AlertsResponse = serde_json::from_str(&body)?;
        debug!(features = alerts.features.len(), "alerts response parsed");
        Ok(alerts)
    }
}

/// Reason text from the status line as sent. hyper only records it when
/// it differs from the standard phrase, so fall back to that.
fn reason_phrase(response: &reqwest::Response) -> String {
    if let Some(phrase) = response.extensions().get::<hyper::ext::ReasonPhrase>() {
        return String::from_utf8_lossy(phrase.as_bytes()).into_owned();
    }
    response
        .status()
        .canonical_reason()
        .unwrap_or_default()
        .to_string()
}
