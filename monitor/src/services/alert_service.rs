// File: monitor/src/services/alert_service.rs
use crate::constants::alerts::WEBHOOK_TIMEOUT;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Fire-and-forget notification target for confirmed state changes
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, urgent: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Critical,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertPayload {
    pub timestamp: DateTime<Utc>,
    pub severity: AlertSeverity,
    pub delegate_name: String,
    pub host: String,
    pub message: String,
}

/// Posts alerts to a webhook. An empty URL disables delivery.
#[derive(Clone)]
pub struct AlertService {
    webhook_url: String,
    delegate_name: String,
    host: String,
    client: Client,
}

impl AlertService {
    pub fn new(webhook_url: String, delegate_name: String, host: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client for AlertService: {}", e))?;

        Ok(Self {
            webhook_url,
            delegate_name,
            host,
            client,
        })
    }

    pub fn is_enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    pub fn get_webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn payload(&self, message: &str, urgent: bool) -> AlertPayload {
        AlertPayload {
            timestamp: Utc::now(),
            severity: if urgent {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Info
            },
            delegate_name: self.delegate_name.clone(),
            host: self.host.clone(),
            message: message.to_string(),
        }
    }

    /// Send a harmless info alert to check the webhook is reachable
    pub async fn test_webhook(&self) -> Result<()> {
        let payload = self.payload("Delegate monitor started", false);
        self.send_webhook(&payload).await
    }

    pub async fn send_webhook(&self, payload: &AlertPayload) -> Result<()> {
        if !self.is_enabled() {
            debug!("No webhook URL configured, skipping alert");
            return Ok(());
        }

        let response = timeout(
            WEBHOOK_TIMEOUT,
            self.client.post(&self.webhook_url).json(payload).send(),
        )
        .await
        .map_err(|_| anyhow!("Webhook timeout"))?
        .map_err(|e| anyhow!("Webhook request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!("Webhook returned status: {}", response.status()));
        }

        info!(
            "Alert sent for {}: {:?} {}",
            payload.delegate_name, payload.severity, payload.message
        );
        Ok(())
    }
}

impl NotificationSink for AlertService {
    fn notify(&self, message: &str, urgent: bool) {
        if !self.is_enabled() {
            debug!("Alert not delivered (webhook disabled): {}", message);
            return;
        }

        let payload = self.payload(message, urgent);
        let service = self.clone();
        tokio::spawn(async move {
            if let Err(e) = service.send_webhook(&payload).await {
                warn!("Failed to send alert for {}: {}", payload.delegate_name, e);
            }
        });
    }
}
