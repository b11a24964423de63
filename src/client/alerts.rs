use serde_json::{json, Value};

use crate::client::{ApiRequest, ResilientClient};
use crate::envelope::Envelope;
use crate::fixtures;
use crate::models::{Alert, AlertActionResult, AlertStatus, NewAlert, VulnerabilityContext};

impl ResilientClient {
    /// Alert feed, optionally filtered by status on the backend side.
    /// The fixture fallback ignores the filter; demo alerts are all active.
    pub async fn get_alerts(&self, status: Option<AlertStatus>) -> Envelope<Vec<Alert>> {
        let path = match status {
            Some(status) => format!("/api/alerts?status={}", status.as_str()),
            None => "/api/alerts".to_string(),
        };

        self.fetch_or_fixture(ApiRequest::get(path), fixtures::alerts)
            .await
    }

    /// Creates a new alert. When the backend is unreachable the alert is
    /// echoed back with a locally fabricated timestamp-derived id; the
    /// fallback flag is the caller's only signal that nothing was stored.
    pub async fn create_alert(&self, new: NewAlert) -> Envelope<Alert> {
        let body = serde_json::to_value(&new).unwrap_or(Value::Null);

        self.mutate_or_accept(ApiRequest::post("/api/alerts", body), move || {
            let now = chrono::Utc::now();
            Alert {
                id: format!("alert-{}", now.timestamp_micros()),
                title: new.title,
                description: new.description,
                severity: new.severity,
                status: AlertStatus::Active,
                device_id: new.device_id,
                device_name: new.device_name,
                source: None,
                created_at: now.to_rfc3339(),
                updated_at: None,
                vulnerability_context: VulnerabilityContext::default(),
            }
        })
        .await
    }

    pub async fn acknowledge_alert(&self, alert_id: &str) -> Envelope<AlertActionResult> {
        let path = format!("/api/alerts/{}/acknowledge", alert_id);
        let alert_id = alert_id.to_owned();

        self.mutate_or_accept(ApiRequest::post_empty(path), move || AlertActionResult {
            message: "Alert acknowledged".to_string(),
            alert_id,
        })
        .await
    }

    pub async fn resolve_alert(
        &self,
        alert_id: &str,
        resolution: Option<&str>,
    ) -> Envelope<AlertActionResult> {
        let path = format!("/api/alerts/{}/resolve", alert_id);
        let body = json!({ "resolution": resolution.unwrap_or("Resolved") });
        let alert_id = alert_id.to_owned();

        self.mutate_or_accept(ApiRequest::post(path, body), move || AlertActionResult {
            message: "Alert resolved".to_string(),
            alert_id,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::test_support::{fast_client, DeadTransport, ServerErrorTransport, StaticTransport};
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn http_500_on_every_attempt_serves_the_three_alert_fixture() {
        let transport = Arc::new(ServerErrorTransport::default());
        let client = fast_client(transport.clone());

        let env = client.get_alerts(None).await;

        assert_eq!(transport.attempts.load(Ordering::SeqCst), 3);
        assert!(env.success);
        assert!(env.is_fallback);
        let alerts = env.data.unwrap();
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].id, "1");
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[1].id, "2");
        assert_eq!(alerts[1].severity, Severity::High);
        assert_eq!(alerts[2].id, "3");
        assert_eq!(alerts[2].severity, Severity::Medium);
    }

    #[tokio::test]
    async fn status_filter_lands_in_the_query_string() {
        let transport = Arc::new(StaticTransport::new("[]"));
        let client = fast_client(transport.clone());

        let _ = client.get_alerts(Some(AlertStatus::Active)).await;

        assert_eq!(
            transport.last_path().unwrap(),
            "/api/alerts?status=ACTIVE"
        );
    }

    #[tokio::test]
    async fn created_alert_echoes_the_input_with_a_fresh_id() {
        let client = fast_client(Arc::new(DeadTransport::default()));
        let new = NewAlert {
            title: "X".to_string(),
            description: "manual test alert".to_string(),
            severity: Severity::Critical,
            device_id: Some("dev-001".to_string()),
            device_name: None,
        };

        let first = client.create_alert(new.clone()).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = client.create_alert(new).await;

        assert!(first.success && first.is_fallback);
        assert!(second.success && second.is_fallback);

        let first = first.data.unwrap();
        let second = second.data.unwrap();
        assert_eq!(first.title, "X");
        assert_eq!(first.severity, Severity::Critical);
        assert_eq!(first.device_id.as_deref(), Some("dev-001"));
        assert_eq!(first.status, AlertStatus::Active);
        // timestamp-derived, so a new id every call
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn acknowledge_and_resolve_never_fail_the_caller() {
        let client = fast_client(Arc::new(DeadTransport::default()));

        let ack = client.acknowledge_alert("2").await;
        let resolve = client.resolve_alert("2", Some("patched")).await;

        assert!(ack.success && ack.is_fallback);
        assert!(resolve.success && resolve.is_fallback);
        assert_eq!(ack.data.unwrap().alert_id, "2");
        assert_eq!(resolve.data.unwrap().message, "Alert resolved");
    }
}
