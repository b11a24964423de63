use log::{info, warn};
use std::sync::Arc;

use autoops_client::client::ResilientClient;
use autoops_client::config::PollConfig;
use autoops_client::logger::init_logger;
use autoops_client::models::AlertStatus;
use autoops_client::poller::spawn_poller;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_logger();

    let client = Arc::new(ResilientClient::from_env());
    let poll = PollConfig::from_env();

    let inventory_client = Arc::clone(&client);
    let inventory = spawn_poller("inventory", poll.inventory_interval, move || {
        let client = Arc::clone(&inventory_client);
        async move {
            let env = client.get_inventory().await;
            if env.is_fallback {
                warn!("backend unreachable, showing demo inventory");
            }
            info!(
                "inventory: {} devices",
                env.data.map(|d| d.len()).unwrap_or(0)
            );
        }
    });

    let alerts_client = Arc::clone(&client);
    let alerts = spawn_poller("alerts", poll.alerts_interval, move || {
        let client = Arc::clone(&alerts_client);
        async move {
            let env = client.get_alerts(Some(AlertStatus::Active)).await;
            if env.is_fallback {
                warn!("backend unreachable, showing demo alerts");
            }
            info!(
                "alerts: {} active",
                env.data.map(|a| a.len()).unwrap_or(0)
            );
        }
    });

    let patches_client = Arc::clone(&client);
    let patches = spawn_poller("patches", poll.patches_interval, move || {
        let client = Arc::clone(&patches_client);
        async move {
            let env = client.get_patches().await;
            if env.is_fallback {
                warn!("backend unreachable, showing demo patches");
            }
            info!(
                "patches: {} pending",
                env.data.map(|p| p.len()).unwrap_or(0)
            );
        }
    });

    let schedules_client = Arc::clone(&client);
    let schedules = spawn_poller("schedules", poll.schedules_interval, move || {
        let client = Arc::clone(&schedules_client);
        async move {
            let env = client.get_schedules(None).await;
            if env.is_fallback {
                warn!("backend unreachable, showing demo schedules");
            }
            info!(
                "schedules: {} booked",
                env.data.map(|s| s.len()).unwrap_or(0)
            );
        }
    });

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
    }

    info!("shutting down");
    inventory.stop();
    alerts.stop();
    patches.stop();
    schedules.stop();
}
