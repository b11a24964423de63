use serde::{Deserialize, Serialize};

use super::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleStatus {
    #[serde(alias = "scheduled")]
    Scheduled,
    #[serde(alias = "executing")]
    Executing,
    #[serde(alias = "completed")]
    Completed,
    #[serde(alias = "cancelled")]
    Cancelled,
    #[serde(alias = "failed")]
    Failed,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "SCHEDULED",
            ScheduleStatus::Executing => "EXECUTING",
            ScheduleStatus::Completed => "COMPLETED",
            ScheduleStatus::Cancelled => "CANCELLED",
            ScheduleStatus::Failed => "FAILED",
        }
    }
}

/// A scheduled patch deployment waiting for its maintenance window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_id: String,
    pub patch_id: String,
    pub patch_title: String,
    pub severity: Severity,
    #[serde(default)]
    pub device_ids: Vec<String>,
    pub device_count: u32,
    pub scheduled_for: String,
    pub status: ScheduleStatus,
    pub requested_by: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub patch_id: String,
    pub patch_title: String,
    pub severity: Severity,
    pub device_ids: Vec<String>,
    pub scheduled_for: String,
    pub requested_by: String,
}

/// Compact entry for the upcoming-deployments widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDeployment {
    pub id: String,
    pub patch_title: String,
    pub scheduled_for: String,
    pub device_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleActionResult {
    pub message: String,
    pub schedule_id: String,
}
