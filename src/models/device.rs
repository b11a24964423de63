use serde::{Deserialize, Serialize};

use super::{VulnerabilityCount, VulnerabilityDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceStatus {
    #[serde(alias = "online")]
    Online,
    #[serde(alias = "offline")]
    Offline,
}

/// Patch compliance as the backend reports it on a device record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchCompliance {
    Compliant,
    Pending,
    #[serde(rename = "non-compliant")]
    NonCompliant,
}

/// A managed device as shown on the inventory screen, enriched with
/// vulnerability data correlated from the CVE feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(deserialize_with = "crate::models::ids::flexible")]
    pub id: String,
    pub name: String,
    pub ip_address: String,
    #[serde(default)]
    pub mac_address: Option<String>,
    pub operating_system: String,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    /// Absent on the enriched inventory feed, which only lists devices it
    /// could reach for correlation.
    #[serde(default)]
    pub status: Option<DeviceStatus>,
    pub last_seen_at: String,
    #[serde(default)]
    pub patch_status: Option<PatchCompliance>,
    #[serde(default)]
    pub pending_patches: u32,
    /// 0-100, precomputed by the backend.
    pub risk_score: f64,
    pub vulnerability_stats: VulnerabilityCount,
    #[serde(default)]
    pub top_vulnerabilities: Vec<VulnerabilityDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub message: String,
    pub device_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn device_decodes_from_backend_shape() {
        let body = r#"{
            "id": "dev-001",
            "name": "WEB-SERVER-PROD-01",
            "ipAddress": "192.168.1.10",
            "macAddress": "00:0C:29:A1:B2:C3",
            "operatingSystem": "Windows Server 2019 Build 17763",
            "type": "Windows Server",
            "client": "Acme Corporation",
            "site": "Data Center East",
            "status": "ONLINE",
            "lastSeenAt": "2024-11-05T08:30:00Z",
            "patchStatus": "pending",
            "pendingPatches": 2,
            "riskScore": 87.5,
            "vulnerabilityStats": {"critical": 2, "high": 3, "medium": 3, "low": 0, "total": 8},
            "topVulnerabilities": [
                {"cveId": "CVE-2024-38063", "severity": "CRITICAL", "cvssScore": 9.8}
            ]
        }"#;

        let device: Device = serde_json::from_str(body).unwrap();

        assert_eq!(device.id, "dev-001");
        assert_eq!(device.device_type, "Windows Server");
        assert_eq!(device.status, Some(DeviceStatus::Online));
        assert_eq!(device.patch_status, Some(PatchCompliance::Pending));
        assert_eq!(device.vulnerability_stats.total, 8);
        assert_eq!(device.top_vulnerabilities[0].severity, Severity::Critical);
    }

    #[test]
    fn device_decodes_from_the_enriched_inventory_shape() {
        // the vulnerability-correlation feed carries no status, compliance
        // or pending-patch fields, and its stats have no low bucket
        let body = r#"{
            "id": "dev-001",
            "name": "WEB-SERVER-PROD-01",
            "type": "Windows Server",
            "operatingSystem": "Windows Server 2019 Build 17763",
            "ipAddress": "192.168.1.10",
            "macAddress": "00:0C:29:A1:B2:C3",
            "lastSeenAt": "2024-11-05T08:30:00Z",
            "client": "Acme Corporation",
            "site": "Data Center East",
            "vulnerabilityStats": {"total": 8, "critical": 2, "high": 3, "medium": 3},
            "topVulnerabilities": [
                {"cveId": "CVE-2024-38063", "cvssScore": 9.8, "severity": "CRITICAL"},
                {"cveId": "CVE-2024-43491", "cvssScore": 9.0, "severity": "CRITICAL"}
            ],
            "riskScore": 87.5
        }"#;

        let device: Device = serde_json::from_str(body).unwrap();

        assert_eq!(device.id, "dev-001");
        assert_eq!(device.status, None);
        assert_eq!(device.patch_status, None);
        assert_eq!(device.pending_patches, 0);
        assert_eq!(device.vulnerability_stats.low, 0);
        assert_eq!(device.vulnerability_stats.total, 8);
    }

    #[test]
    fn legacy_feed_numeric_device_id_decodes_as_a_string() {
        let body = r#"{
            "id": 1,
            "name": "PROD-WEB-01",
            "ipAddress": "192.168.1.10",
            "operatingSystem": "Windows Server 2019",
            "type": "Server",
            "status": "online",
            "patchStatus": "compliant",
            "lastSeenAt": "2024-11-05T08:30:00Z",
            "riskScore": 25.5,
            "vulnerabilityStats": {"total": 2, "critical": 0, "high": 0, "medium": 2, "low": 0}
        }"#;

        let device: Device = serde_json::from_str(body).unwrap();

        assert_eq!(device.id, "1");
        assert_eq!(device.status, Some(DeviceStatus::Online));
    }

    #[test]
    fn device_with_missing_required_field_fails_fast() {
        // no silent undefined propagation: a record without an id is rejected
        let body = r#"{"name": "WEB-SERVER-PROD-01"}"#;

        assert!(serde_json::from_str::<Device>(body).is_err());
    }

    #[test]
    fn compliance_roundtrips_its_wire_names() {
        assert_eq!(
            serde_json::to_string(&PatchCompliance::NonCompliant).unwrap(),
            "\"non-compliant\""
        );
        let parsed: PatchCompliance = serde_json::from_str("\"compliant\"").unwrap();
        assert_eq!(parsed, PatchCompliance::Compliant);
    }
}
