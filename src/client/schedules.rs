use serde_json::Value;

use crate::client::{ApiRequest, ResilientClient};
use crate::envelope::Envelope;
use crate::fixtures;
use crate::models::{
    NewSchedule, Schedule, ScheduleActionResult, ScheduleStatus, UpcomingDeployment,
};

impl ResilientClient {
    /// Deployment schedules, optionally filtered by status.
    pub async fn get_schedules(
        &self,
        status: Option<ScheduleStatus>,
    ) -> Envelope<Vec<Schedule>> {
        let path = match status {
            Some(status) => format!("/api/schedules?status={}", status.as_str()),
            None => "/api/schedules".to_string(),
        };

        self.fetch_or_fixture(ApiRequest::get(path), fixtures::schedules)
            .await
    }

    /// Condensed upcoming-deployment view for the dashboard calendar.
    pub async fn get_patch_schedule(&self) -> Envelope<Vec<UpcomingDeployment>> {
        self.fetch_or_fixture(
            ApiRequest::get("/api/patch-schedule"),
            fixtures::upcoming_deployments,
        )
        .await
    }

    /// Books a deployment window. Offline, the schedule is accepted locally
    /// with a timestamp-derived id.
    pub async fn create_schedule(&self, new: NewSchedule) -> Envelope<Schedule> {
        let body = serde_json::to_value(&new).unwrap_or(Value::Null);

        self.mutate_or_accept(ApiRequest::post("/api/schedules", body), move || {
            let now = chrono::Utc::now();
            Schedule {
                schedule_id: format!("sched-{}", now.format("%Y%m%d%H%M%S")),
                patch_id: new.patch_id,
                patch_title: new.patch_title,
                severity: new.severity,
                device_count: new.device_ids.len() as u32,
                device_ids: new.device_ids,
                scheduled_for: new.scheduled_for,
                status: ScheduleStatus::Scheduled,
                requested_by: new.requested_by,
                created_at: now.to_rfc3339(),
                updated_at: None,
            }
        })
        .await
    }

    /// Looks up one schedule by id. Falls back to the fixture list, so an
    /// unknown id still reports a failure.
    pub async fn get_schedule(&self, schedule_id: &str) -> Envelope<Schedule> {
        let path = format!("/api/schedules/{}", schedule_id);
        let schedule_id = schedule_id.to_owned();

        self.fetch_or_else(ApiRequest::get(path), move |e| {
            match fixtures::schedules()
                .into_iter()
                .find(|s| s.schedule_id == schedule_id)
            {
                Some(schedule) => Envelope::fallback(schedule),
                None => Envelope::failed(e.to_string()),
            }
        })
        .await
    }

    /// Cancels a pending schedule. Never fails the caller.
    pub async fn cancel_schedule(&self, schedule_id: &str) -> Envelope<ScheduleActionResult> {
        let path = format!("/api/schedules/{}", schedule_id);
        let schedule_id = schedule_id.to_owned();

        self.mutate_or_accept(ApiRequest::delete(path), move || ScheduleActionResult {
            message: "Schedule cancelled".to_string(),
            schedule_id,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::test_support::{fast_client, DeadTransport, StaticTransport};
    use std::sync::Arc;

    #[tokio::test]
    async fn dead_backend_serves_the_fixture_schedules() {
        let client = fast_client(Arc::new(DeadTransport::default()));

        let env = client.get_schedules(None).await;

        assert!(env.success && env.is_fallback);
        let ids: Vec<String> = env
            .data
            .unwrap()
            .into_iter()
            .map(|s| s.schedule_id)
            .collect();
        assert_eq!(ids, vec!["schedule-001", "schedule-002"]);
    }

    #[tokio::test]
    async fn status_filter_lands_in_the_query_string() {
        let transport = Arc::new(StaticTransport::new("[]"));
        let client = fast_client(transport.clone());

        let env = client.get_schedules(Some(ScheduleStatus::Scheduled)).await;

        assert!(env.success && !env.is_fallback);
        assert_eq!(
            transport.last_path().as_deref(),
            Some("/api/schedules?status=SCHEDULED")
        );
    }

    #[tokio::test]
    async fn upcoming_view_mirrors_the_schedule_fixtures() {
        let client = fast_client(Arc::new(DeadTransport::default()));

        let env = client.get_patch_schedule().await;

        let upcoming = env.data.unwrap();
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id, "schedule-001");
        assert!(upcoming[0].device_count > 0);
    }

    #[tokio::test]
    async fn schedule_creation_is_accepted_offline() {
        let client = fast_client(Arc::new(DeadTransport::default()));
        let new = NewSchedule {
            patch_id: "KB5034441".to_string(),
            patch_title: "2024-01 Cumulative Update".to_string(),
            severity: Severity::Critical,
            device_ids: vec!["dev-001".to_string(), "dev-004".to_string()],
            scheduled_for: "2025-01-12T02:00:00Z".to_string(),
            requested_by: "admin".to_string(),
        };

        let env = client.create_schedule(new).await;

        assert!(env.success && env.is_fallback);
        let schedule = env.data.unwrap();
        assert!(schedule.schedule_id.starts_with("sched-"));
        assert_eq!(schedule.device_count, 2);
        assert_eq!(schedule.status, ScheduleStatus::Scheduled);
    }

    #[tokio::test]
    async fn known_schedule_id_falls_back_to_the_fixture() {
        let client = fast_client(Arc::new(DeadTransport::default()));

        let env = client.get_schedule("schedule-002").await;

        assert!(env.success && env.is_fallback);
        assert_eq!(env.data.unwrap().schedule_id, "schedule-002");
    }

    #[tokio::test]
    async fn unknown_schedule_id_reports_the_failure() {
        let client = fast_client(Arc::new(DeadTransport::default()));

        let env = client.get_schedule("schedule-999").await;

        assert!(!env.success);
        assert_eq!(env.data, None);
        assert_eq!(env.error.as_deref(), Some("request failed: connection refused"));
    }

    #[tokio::test]
    async fn cancellation_never_fails() {
        let client = fast_client(Arc::new(DeadTransport::default()));

        let env = client.cancel_schedule("schedule-001").await;

        assert!(env.success && env.is_fallback);
        let result = env.data.unwrap();
        assert_eq!(result.schedule_id, "schedule-001");
        assert_eq!(result.message, "Schedule cancelled");
    }
}
