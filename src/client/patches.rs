use serde_json::Value;

use crate::client::{ApiRequest, ResilientClient};
use crate::envelope::Envelope;
use crate::fixtures;
use crate::models::{
    AnalyzePatchRequest, DeployPatchRequest, DeploymentResult, Patch, PatchCoverage,
    PatchDecision, PatchDetails, PatchStatus, PatchStatusSummary, Recommendation, Severity,
};

impl ResilientClient {
    /// Patch catalog as reported by the RMM platform.
    pub async fn get_patches(&self) -> Envelope<Vec<Patch>> {
        self.fetch_or_fixture(ApiRequest::get("/api/patches"), fixtures::patches)
            .await
    }

    /// Extended deployment details for one patch. A dead backend falls back
    /// to the fixture catalog, so unknown ids do fail here.
    pub async fn get_patch_details(&self, patch_id: &str) -> Envelope<PatchDetails> {
        let path = format!("/api/patches/{}/details", patch_id);
        let patch_id = patch_id.to_owned();

        self.fetch_or_else(ApiRequest::get(path), move |e| {
            match fixtures::patch_details(&patch_id) {
                Some(details) => Envelope::fallback(details),
                None => Envelope::failed(e.to_string()),
            }
        })
        .await
    }

    /// Fleet-wide patch compliance rollup.
    pub async fn get_patch_status(&self) -> Envelope<PatchStatusSummary> {
        self.fetch_or_fixture(ApiRequest::get("/api/patches/status"), fixtures::patch_status)
            .await
    }

    /// Coverage analysis across all devices.
    pub async fn get_patch_analysis(&self) -> Envelope<PatchCoverage> {
        self.fetch_or_fixture(
            ApiRequest::get("/api/patch-analysis"),
            fixtures::patch_coverage,
        )
        .await
    }

    /// Starts a patch deployment. Offline, the deployment is accepted with
    /// a timestamp-derived id and the status it would have entered.
    pub async fn deploy_patch(&self, req: DeployPatchRequest) -> Envelope<DeploymentResult> {
        let body = serde_json::to_value(&req).unwrap_or(Value::Null);

        self.mutate_or_accept(ApiRequest::post("/api/patches/deploy", body), move || {
            let now = chrono::Utc::now();
            let status = if req.scheduled_for.is_some() {
                PatchStatus::Scheduled
            } else {
                PatchStatus::Deploying
            };
            DeploymentResult {
                deployment_id: format!("deploy-{}", now.format("%Y%m%d%H%M%S")),
                patch_id: req.patch_id,
                device_ids: req.device_ids,
                status,
                scheduled_for: req.scheduled_for,
                initiated_at: now.to_rfc3339(),
                message: "Deployment initiated".to_string(),
            }
        })
        .await
    }

    /// Hosted-model patch analysis. When the model service is unreachable
    /// the decision comes from a fixed severity table.
    pub async fn analyze_patch(&self, req: AnalyzePatchRequest) -> Envelope<PatchDecision> {
        let severity = req.patch.severity;
        let body = serde_json::to_value(&req).unwrap_or(Value::Null);

        self.mutate_or_accept(ApiRequest::post("/api/ai/analyze-patch", body), move || {
            fallback_decision(severity)
        })
        .await
    }
}

/// Static decision table keyed on severity alone; real scoring happens in
/// the hosted model service.
pub(crate) fn fallback_decision(severity: Severity) -> PatchDecision {
    match severity {
        Severity::Critical | Severity::High => PatchDecision {
            recommendation: Recommendation::Review,
            risk_level: 7,
            reasoning: "Elevated severity patch requires manual review before deployment"
                .to_string(),
            confidence: 0.5,
        },
        Severity::Medium | Severity::Low => PatchDecision {
            recommendation: Recommendation::Approve,
            risk_level: 3,
            reasoning: "Low deployment risk, suitable for the next maintenance window"
                .to_string(),
            confidence: 0.5,
        },
    }
}
