use serde::{Deserialize, Serialize};

use super::{Device, Severity, VulnerabilityDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PatchStatus {
    #[serde(alias = "available")]
    Available,
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "deploying")]
    Deploying,
    #[serde(alias = "deployed")]
    Deployed,
    #[serde(alias = "failed")]
    Failed,
    #[serde(alias = "scheduled")]
    Scheduled,
}

/// A vendor patch (KB article or distro advisory) with its CVE linkage and
/// rollout counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub release_date: String,
    #[serde(default, rename = "relatedCVEs")]
    pub related_cves: Vec<String>,
    /// Legacy feeds list these as plain numbers.
    #[serde(default, deserialize_with = "crate::models::ids::flexible_vec")]
    pub affected_devices: Vec<String>,
    #[serde(default)]
    pub installed_count: u32,
    #[serde(default)]
    pub failed_count: u32,
    pub status: PatchStatus,
    pub vendor: String,
    #[serde(default)]
    pub category: Option<String>,
    pub size: String,
    pub requires_reboot: bool,
}

/// Extended deployment metadata for a single patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchDetails {
    pub install_time: String,
    pub requires_reboot: bool,
    #[serde(default)]
    pub supersedes: Vec<String>,
    #[serde(default)]
    pub superseded_by: Option<String>,
    pub knowledge_base_url: String,
    pub deployment_notes: String,
    pub rollback_available: bool,
    pub estimated_downtime: String,
    pub success_rate: f64,
}

/// Fleet-wide patch rollup shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchStatusSummary {
    pub total_devices: u32,
    pub total_patches: u32,
    pub compliant: u32,
    pub pending: u32,
    pub critical_patches: u32,
    pub last_update: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchCoverage {
    pub total_devices: u32,
    pub fully_patched: u32,
    pub partially_patched: u32,
    pub unpatched: u32,
    pub coverage_rate: f64,
    #[serde(default)]
    pub critical_exposure: Vec<CriticalExposure>,
    #[serde(default)]
    pub patch_recommendations: Vec<PatchRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalExposure {
    pub device_id: String,
    pub device_name: String,
    pub cve_id: String,
    pub cvss_score: f64,
}

/// Per-device patch shortlist in the coverage analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchRecommendation {
    pub device_id: String,
    pub device_name: String,
    pub critical_patches: u32,
    #[serde(default)]
    pub patches: Vec<RecommendedPatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedPatch {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub cve_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployPatchRequest {
    pub patch_id: String,
    pub device_ids: Vec<String>,
    #[serde(default)]
    pub scheduled_for: Option<String>,
    #[serde(default)]
    pub ai_approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResult {
    pub deployment_id: String,
    pub patch_id: String,
    pub device_ids: Vec<String>,
    pub status: PatchStatus,
    #[serde(default)]
    pub scheduled_for: Option<String>,
    pub initiated_at: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePatchRequest {
    pub patch: Patch,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub vulnerabilities: Vec<VulnerabilityDetail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Approve,
    Review,
}

/// Verdict of the hosted-model patch analysis. When the model service is
/// unreachable the client substitutes a fixed decision keyed on severity
/// alone; there is no local scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchDecision {
    pub recommendation: Recommendation,
    pub risk_level: u8,
    pub reasoning: String,
    pub confidence: f64,
}
