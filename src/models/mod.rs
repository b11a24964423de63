use serde::{Deserialize, Serialize};

pub use alert::{Alert, AlertActionResult, AlertStatus, NewAlert, VulnerabilityContext};
pub use device::{Device, DeviceStatus, PatchCompliance, ScanResult};
pub use patch::{
    AnalyzePatchRequest, CriticalExposure, DeployPatchRequest, DeploymentResult, Patch,
    PatchCoverage, PatchDecision, PatchDetails, PatchRecommendation, PatchStatus,
    PatchStatusSummary, Recommendation, RecommendedPatch,
};
pub use schedule::{
    NewSchedule, Schedule, ScheduleActionResult, ScheduleStatus, UpcomingDeployment,
};

pub mod alert;
pub mod device;
pub mod patch;
pub mod schedule;

/// Severity as reported by the backend. Call sites are not consistent about
/// casing ("CRITICAL" vs "critical" vs "Critical"), so deserialization
/// accepts all three; we always serialize uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[serde(alias = "critical", alias = "Critical")]
    Critical,
    #[serde(alias = "high", alias = "High")]
    High,
    #[serde(alias = "medium", alias = "Medium")]
    Medium,
    #[serde(alias = "low", alias = "Low")]
    Low,
}

/// Vulnerability counts broken down by severity, as attached to devices and
/// alert context blocks. The enriched inventory feed omits `low` entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityCount {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
    pub total: u32,
}

/// Legacy API feeds emit numeric record ids where the current backend uses
/// strings; both decode to `String`.
pub(crate) mod ids {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Text(String),
        Number(i64),
    }

    impl From<WireId> for String {
        fn from(id: WireId) -> Self {
            match id {
                WireId::Text(s) => s,
                WireId::Number(n) => n.to_string(),
            }
        }
    }

    pub(crate) fn flexible<'de, D>(de: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        WireId::deserialize(de).map(String::from)
    }

    pub(crate) fn flexible_opt<'de, D>(de: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<WireId>::deserialize(de).map(|id| id.map(String::from))
    }

    pub(crate) fn flexible_vec<'de, D>(de: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<WireId>::deserialize(de).map(|ids| ids.into_iter().map(String::from).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityDetail {
    pub cve_id: String,
    pub severity: Severity,
    pub cvss_score: f64,
    #[serde(default)]
    pub description: Option<String>,
}
