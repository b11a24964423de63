use serde::{Deserialize, Serialize};

use super::{Severity, VulnerabilityDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "acknowledged")]
    Acknowledged,
    #[serde(alias = "resolved")]
    Resolved,
}

impl AlertStatus {
    /// Wire value for the `?status=` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "ACTIVE",
            AlertStatus::Acknowledged => "ACKNOWLEDGED",
            AlertStatus::Resolved => "RESOLVED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(deserialize_with = "crate::models::ids::flexible")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    pub status: AlertStatus,
    #[serde(default, deserialize_with = "crate::models::ids::flexible_opt")]
    pub device_id: Option<String>,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// The legacy monitoring feed calls this `timestamp`.
    #[serde(alias = "timestamp")]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub vulnerability_context: VulnerabilityContext,
}

/// Vulnerability counts and details the CVE correlation path attaches
/// directly on the alert record, not under a nested key. Plain monitoring
/// alerts carry none of these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_vulnerabilities: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_vulnerabilities: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_vulnerabilities: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerability_details: Vec<VulnerabilityDetail>,
}

impl VulnerabilityContext {
    pub fn is_empty(&self) -> bool {
        self.related_vulnerabilities.is_none()
            && self.critical_vulnerabilities.is_none()
            && self.high_vulnerabilities.is_none()
            && self.vulnerability_details.is_empty()
    }
}

/// Caller-supplied fields for alert creation. Field validation happens in
/// the UI before this layer is invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub device_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertActionResult {
    pub message: String,
    pub alert_id: String,
}
