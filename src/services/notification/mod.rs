//! Fire-and-forget alerting for operational conditions such as a low
//! relayer balance. Alert delivery failures are logged and dropped; they
//! never affect the outcome of the operation that raised the alert.

use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

/// Alert sink consumed by the validator facade.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait AlertHandlerTrait: Send + Sync {
    /// Delivers an operational alert. Infallible from the caller's point of
    /// view; implementations handle their own delivery errors.
    async fn alert(&self, message: &str);
}

/// Payload posted to the alert webhook endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AlertNotification {
    pub id: String,
    pub event: String,
    pub message: String,
    pub timestamp: String,
}

impl AlertNotification {
    pub fn new(event: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event: event.to_string(),
            message: message.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Posts alerts as JSON to a webhook endpoint.
pub struct WebhookAlertHandler {
    url: String,
    client: reqwest::Client,
}

impl WebhookAlertHandler {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AlertHandlerTrait for WebhookAlertHandler {
    async fn alert(&self, message: &str) {
        let notification = AlertNotification::new("operational_alert", message);
        match self.client.post(&self.url).json(&notification).send().await {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => warn!("alert webhook returned status {}", response.status()),
            Err(e) => warn!("failed to deliver alert: {e}"),
        }
    }
}

/// Writes alerts to the process log. Used when no webhook is configured.
pub struct LogAlertHandler;

#[async_trait]
impl AlertHandlerTrait for LogAlertHandler {
    async fn alert(&self, message: &str) {
        warn!("ALERT: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_notification_payload_shape() {
        let notification = AlertNotification::new("operational_alert", "balance low");
        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["event"], "operational_alert");
        assert_eq!(value["message"], "balance low");
        assert!(!value["id"].as_str().unwrap().is_empty());
        assert!(!value["timestamp"].as_str().unwrap().is_empty());
    }
}
