use crate::client::{ApiRequest, ResilientClient};
use crate::envelope::Envelope;
use crate::fixtures;
use crate::models::{Device, ScanResult};

impl ResilientClient {
    /// Device inventory with vulnerability correlation.
    pub async fn get_inventory(&self) -> Envelope<Vec<Device>> {
        self.fetch_or_fixture(ApiRequest::get("/api/inventory"), fixtures::inventory)
            .await
    }

    /// Triggers a vulnerability scan on one device.
    pub async fn scan_device(&self, device_id: &str) -> Envelope<ScanResult> {
        let path = format!("/api/scan-device/{}", device_id);
        let device_id = device_id.to_owned();

        self.mutate_or_accept(ApiRequest::post_empty(path), move || ScanResult {
            message: "Scan initiated".to_string(),
            device_id,
        })
        .await
    }
}
