//! Static offline fixtures served when the backend stays unreachable.
//!
//! Everything here is fully deterministic (fixed timestamps, no randomness)
//! so repeated fallback calls return identical payloads. These records are
//! sample data for demo mode, not a cache of real responses.

use crate::models::{
    Alert, AlertStatus, CriticalExposure, Device, DeviceStatus, Patch, PatchCompliance,
    PatchCoverage, PatchDetails, PatchRecommendation, PatchStatus, PatchStatusSummary,
    RecommendedPatch, Schedule, ScheduleStatus, Severity, UpcomingDeployment,
    VulnerabilityContext, VulnerabilityCount, VulnerabilityDetail,
};

fn vuln(cve_id: &str, severity: Severity, cvss_score: f64, description: &str) -> VulnerabilityDetail {
    VulnerabilityDetail {
        cve_id: cve_id.to_string(),
        severity,
        cvss_score,
        description: Some(description.to_string()),
    }
}

/// Five-device demo inventory.
pub fn inventory() -> Vec<Device> {
    vec![
        Device {
            id: "dev-001".to_string(),
            name: "WEB-SERVER-PROD-01".to_string(),
            ip_address: "192.168.1.10".to_string(),
            mac_address: Some("00:0C:29:A1:B2:C3".to_string()),
            operating_system: "Windows Server 2019 Build 17763".to_string(),
            device_type: "Windows Server".to_string(),
            client: Some("Acme Corporation".to_string()),
            site: Some("Data Center East".to_string()),
            status: Some(DeviceStatus::Online),
            last_seen_at: "2024-11-05T08:30:00Z".to_string(),
            patch_status: Some(PatchCompliance::Pending),
            pending_patches: 2,
            risk_score: 87.5,
            vulnerability_stats: VulnerabilityCount {
                critical: 2,
                high: 3,
                medium: 3,
                low: 0,
                total: 8,
            },
            top_vulnerabilities: vec![
                vuln(
                    "CVE-2024-38063",
                    Severity::Critical,
                    9.8,
                    "Windows TCP/IP Remote Code Execution Vulnerability",
                ),
                vuln(
                    "CVE-2024-43491",
                    Severity::Critical,
                    9.0,
                    "Windows Update Remote Code Execution Vulnerability",
                ),
            ],
        },
        Device {
            id: "dev-002".to_string(),
            name: "DB-SERVER-PROD-01".to_string(),
            ip_address: "192.168.1.20".to_string(),
            mac_address: Some("00:0C:29:D4:E5:F6".to_string()),
            operating_system: "Ubuntu 22.04.3 LTS".to_string(),
            device_type: "Linux Server".to_string(),
            client: Some("Acme Corporation".to_string()),
            site: Some("Data Center East".to_string()),
            status: Some(DeviceStatus::Online),
            last_seen_at: "2024-11-05T08:28:00Z".to_string(),
            patch_status: Some(PatchCompliance::Pending),
            pending_patches: 3,
            risk_score: 72.3,
            vulnerability_stats: VulnerabilityCount {
                critical: 1,
                high: 2,
                medium: 2,
                low: 0,
                total: 5,
            },
            top_vulnerabilities: vec![vuln(
                "CVE-2024-26130",
                Severity::Critical,
                9.1,
                "Linux Kernel Use After Free Vulnerability",
            )],
        },
        Device {
            id: "dev-003".to_string(),
            name: "APP-SERVER-PROD-01".to_string(),
            ip_address: "192.168.1.30".to_string(),
            mac_address: Some("00:0C:29:17:28:39".to_string()),
            operating_system: "Windows Server 2022 Build 20348".to_string(),
            device_type: "Windows Server".to_string(),
            client: Some("TechStart Inc".to_string()),
            site: Some("Data Center West".to_string()),
            status: Some(DeviceStatus::Online),
            last_seen_at: "2024-11-05T08:31:00Z".to_string(),
            patch_status: Some(PatchCompliance::NonCompliant),
            pending_patches: 5,
            risk_score: 92.1,
            vulnerability_stats: VulnerabilityCount {
                critical: 3,
                high: 5,
                medium: 4,
                low: 0,
                total: 12,
            },
            top_vulnerabilities: vec![
                vuln(
                    "CVE-2024-38063",
                    Severity::Critical,
                    9.8,
                    "Windows TCP/IP Remote Code Execution Vulnerability",
                ),
                vuln(
                    "CVE-2024-43491",
                    Severity::Critical,
                    9.0,
                    "Windows Update Remote Code Execution Vulnerability",
                ),
            ],
        },
        Device {
            id: "dev-004".to_string(),
            name: "FILE-SERVER-01".to_string(),
            ip_address: "192.168.1.40".to_string(),
            mac_address: Some("00:0C:29:4A:5B:6C".to_string()),
            operating_system: "Windows Server 2016 Build 14393".to_string(),
            device_type: "Windows Server".to_string(),
            client: Some("Global Enterprises".to_string()),
            site: Some("Branch Office".to_string()),
            status: Some(DeviceStatus::Offline),
            last_seen_at: "2024-11-05T06:30:00Z".to_string(),
            patch_status: Some(PatchCompliance::NonCompliant),
            pending_patches: 8,
            risk_score: 95.7,
            vulnerability_stats: VulnerabilityCount {
                critical: 5,
                high: 6,
                medium: 4,
                low: 0,
                total: 15,
            },
            top_vulnerabilities: vec![vuln(
                "CVE-2024-38063",
                Severity::Critical,
                9.8,
                "Windows TCP/IP Remote Code Execution Vulnerability",
            )],
        },
        Device {
            id: "dev-005".to_string(),
            name: "WORKSTATION-HR-05".to_string(),
            ip_address: "192.168.2.15".to_string(),
            mac_address: Some("00:0C:29:7D:8E:9F".to_string()),
            operating_system: "Windows 11 Pro Build 22621".to_string(),
            device_type: "Workstation".to_string(),
            client: Some("Acme Corporation".to_string()),
            site: Some("Headquarters".to_string()),
            status: Some(DeviceStatus::Online),
            last_seen_at: "2024-11-05T08:32:00Z".to_string(),
            patch_status: Some(PatchCompliance::Compliant),
            pending_patches: 0,
            risk_score: 35.2,
            vulnerability_stats: VulnerabilityCount {
                critical: 0,
                high: 1,
                medium: 2,
                low: 0,
                total: 3,
            },
            top_vulnerabilities: vec![vuln(
                "CVE-2024-38200",
                Severity::High,
                7.5,
                "Microsoft Office Spoofing Vulnerability",
            )],
        },
    ]
}

/// Three-alert demo feed.
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            title: "High CPU Usage on SQL Server".to_string(),
            description: "SQL Server on PROD-DB-01 showing 95% CPU utilization".to_string(),
            severity: Severity::Critical,
            status: AlertStatus::Active,
            device_id: Some("dev-002".to_string()),
            device_name: Some("DB-SERVER-PROD-01".to_string()),
            source: Some("SuperOps".to_string()),
            created_at: "2024-11-05T08:15:00Z".to_string(),
            updated_at: None,
            vulnerability_context: VulnerabilityContext::default(),
        },
        Alert {
            id: "2".to_string(),
            title: "Failed Windows Update".to_string(),
            description: "KB5034441 failed to install on multiple workstations".to_string(),
            severity: Severity::High,
            status: AlertStatus::Active,
            device_id: Some("dev-005".to_string()),
            device_name: Some("WORKSTATION-HR-05".to_string()),
            source: Some("WSUS".to_string()),
            created_at: "2024-11-05T06:30:00Z".to_string(),
            updated_at: None,
            vulnerability_context: VulnerabilityContext::default(),
        },
        Alert {
            id: "3".to_string(),
            title: "Low Disk Space Warning".to_string(),
            description: "C: drive on FILE-SRV-02 has less than 10% free space".to_string(),
            severity: Severity::Medium,
            status: AlertStatus::Active,
            device_id: Some("dev-004".to_string()),
            device_name: Some("FILE-SERVER-01".to_string()),
            source: Some("Monitoring".to_string()),
            created_at: "2024-11-05T04:30:00Z".to_string(),
            updated_at: None,
            vulnerability_context: VulnerabilityContext::default(),
        },
    ]
}

/// Three-patch demo catalog.
pub fn patches() -> Vec<Patch> {
    vec![
        Patch {
            id: "KB5034441".to_string(),
            title: "Windows 11 Security Update".to_string(),
            description: "Cumulative security update".to_string(),
            severity: Severity::Critical,
            release_date: "2024-01-09".to_string(),
            related_cves: vec!["CVE-2024-9123".to_string(), "CVE-2024-8956".to_string()],
            affected_devices: vec!["dev-001".to_string(), "dev-002".to_string()],
            installed_count: 12,
            failed_count: 3,
            status: PatchStatus::Available,
            vendor: "Microsoft".to_string(),
            category: Some("Security Updates".to_string()),
            size: "450 MB".to_string(),
            requires_reboot: true,
        },
        Patch {
            id: "KB5034439".to_string(),
            title: "Windows Server 2022 Update".to_string(),
            description: "Monthly rollup".to_string(),
            severity: Severity::High,
            release_date: "2024-01-09".to_string(),
            related_cves: vec!["CVE-2024-8745".to_string()],
            affected_devices: vec!["dev-003".to_string(), "dev-004".to_string()],
            installed_count: 8,
            failed_count: 0,
            status: PatchStatus::Available,
            vendor: "Microsoft".to_string(),
            category: Some("Update Rollups".to_string()),
            size: "320 MB".to_string(),
            requires_reboot: true,
        },
        Patch {
            id: "UBUNTU-2024-01".to_string(),
            title: "Ubuntu Kernel Security Update".to_string(),
            description: "Fixes use-after-free vulnerability in the kernel".to_string(),
            severity: Severity::High,
            release_date: "2024-01-15".to_string(),
            related_cves: vec!["CVE-2024-26130".to_string()],
            affected_devices: vec!["dev-002".to_string()],
            installed_count: 0,
            failed_count: 0,
            status: PatchStatus::Available,
            vendor: "Canonical".to_string(),
            category: Some("Security Updates".to_string()),
            size: "45 MB".to_string(),
            requires_reboot: true,
        },
    ]
}

/// Extended details for the patches in [`patches`]. Unknown ids get nothing,
/// which surfaces as a failed envelope on the details endpoint.
pub fn patch_details(patch_id: &str) -> Option<PatchDetails> {
    let patch = patches().into_iter().find(|p| p.id == patch_id)?;

    Some(PatchDetails {
        install_time: if patch.requires_reboot {
            "15-20 minutes".to_string()
        } else {
            "5-10 minutes".to_string()
        },
        requires_reboot: patch.requires_reboot,
        supersedes: vec![],
        superseded_by: None,
        knowledge_base_url: format!("https://support.vendor.com/kb/{}", patch.id),
        deployment_notes: "Test in non-production environment before deploying to production servers.".to_string(),
        rollback_available: true,
        estimated_downtime: if patch.requires_reboot {
            "10-15 minutes".to_string()
        } else {
            "2-5 minutes".to_string()
        },
        success_rate: 98.5,
    })
}

pub fn patch_status() -> PatchStatusSummary {
    PatchStatusSummary {
        total_devices: 150,
        total_patches: 3,
        compliant: 128,
        pending: 22,
        critical_patches: 1,
        last_update: "2024-11-05T08:00:00Z".to_string(),
    }
}

pub fn patch_coverage() -> PatchCoverage {
    PatchCoverage {
        total_devices: 147,
        fully_patched: 98,
        partially_patched: 35,
        unpatched: 14,
        coverage_rate: 66.7,
        critical_exposure: vec![
            CriticalExposure {
                device_id: "dev-004".to_string(),
                device_name: "FILE-SERVER-01".to_string(),
                cve_id: "CVE-2024-38063".to_string(),
                cvss_score: 9.8,
            },
            CriticalExposure {
                device_id: "dev-003".to_string(),
                device_name: "APP-SERVER-PROD-01".to_string(),
                cve_id: "CVE-2024-38063".to_string(),
                cvss_score: 9.8,
            },
        ],
        patch_recommendations: vec![
            PatchRecommendation {
                device_id: "dev-001".to_string(),
                device_name: "WEB-SERVER-PROD-01".to_string(),
                critical_patches: 2,
                patches: vec![RecommendedPatch {
                    id: "KB5043083".to_string(),
                    title: "Security Update for Windows Server 2019".to_string(),
                    severity: Severity::Critical,
                    cve_id: "CVE-2024-38063".to_string(),
                }],
            },
            PatchRecommendation {
                device_id: "dev-004".to_string(),
                device_name: "FILE-SERVER-01".to_string(),
                critical_patches: 5,
                patches: vec![RecommendedPatch {
                    id: "KB5043064".to_string(),
                    title: "Security Update for Windows Server 2016".to_string(),
                    severity: Severity::Critical,
                    cve_id: "CVE-2024-38063".to_string(),
                }],
            },
        ],
    }
}

pub fn schedules() -> Vec<Schedule> {
    vec![
        Schedule {
            schedule_id: "schedule-001".to_string(),
            patch_id: "KB5034441".to_string(),
            patch_title: "Windows 11 Security Update".to_string(),
            severity: Severity::Critical,
            device_ids: vec!["dev-001".to_string(), "dev-002".to_string()],
            device_count: 2,
            scheduled_for: "2025-01-10T02:00:00Z".to_string(),
            status: ScheduleStatus::Scheduled,
            requested_by: "admin@acme.example".to_string(),
            created_at: "2025-01-08T14:00:00Z".to_string(),
            updated_at: None,
        },
        Schedule {
            schedule_id: "schedule-002".to_string(),
            patch_id: "UBUNTU-2024-01".to_string(),
            patch_title: "Ubuntu Kernel Security Update".to_string(),
            severity: Severity::High,
            device_ids: vec!["dev-002".to_string()],
            device_count: 1,
            scheduled_for: "2025-01-11T02:00:00Z".to_string(),
            status: ScheduleStatus::Scheduled,
            requested_by: "admin@acme.example".to_string(),
            created_at: "2025-01-08T15:30:00Z".to_string(),
            updated_at: None,
        },
    ]
}

pub fn upcoming_deployments() -> Vec<UpcomingDeployment> {
    schedules()
        .into_iter()
        .map(|s| UpcomingDeployment {
            id: s.schedule_id,
            patch_title: s.patch_title,
            scheduled_for: s.scheduled_for,
            device_count: s.device_count,
        })
        .collect()
}
