use log::warn;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:3001";

const DEFAULT_INVENTORY_POLL_SECS: u64 = 30;
const DEFAULT_ALERTS_POLL_SECS: u64 = 30;
const DEFAULT_PATCHES_POLL_SECS: u64 = 60;
const DEFAULT_SCHEDULES_POLL_SECS: u64 = 60;

pub fn api_base_url() -> String {
    dotenv::var("AUTOOPS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Refresh cadence for the dashboard poll loops. Each loop runs on its own
/// timer with no coordination between them.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub inventory_interval: Duration,
    pub alerts_interval: Duration,
    pub patches_interval: Duration,
    pub schedules_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            inventory_interval: Duration::from_secs(DEFAULT_INVENTORY_POLL_SECS),
            alerts_interval: Duration::from_secs(DEFAULT_ALERTS_POLL_SECS),
            patches_interval: Duration::from_secs(DEFAULT_PATCHES_POLL_SECS),
            schedules_interval: Duration::from_secs(DEFAULT_SCHEDULES_POLL_SECS),
        }
    }
}

impl PollConfig {
    pub fn from_env() -> Self {
        Self {
            inventory_interval: secs_from_env(
                "AUTOOPS_INVENTORY_POLL_SECS",
                DEFAULT_INVENTORY_POLL_SECS,
            ),
            alerts_interval: secs_from_env("AUTOOPS_ALERTS_POLL_SECS", DEFAULT_ALERTS_POLL_SECS),
            patches_interval: secs_from_env("AUTOOPS_PATCHES_POLL_SECS", DEFAULT_PATCHES_POLL_SECS),
            schedules_interval: secs_from_env(
                "AUTOOPS_SCHEDULES_POLL_SECS",
                DEFAULT_SCHEDULES_POLL_SECS,
            ),
        }
    }
}

fn secs_from_env(key: &str, default: u64) -> Duration {
    let secs = match dotenv::var(key) {
        Ok(val) => match val.parse::<u64>() {
            Ok(secs) => secs,
            Err(_) => {
                warn!("invalid value for {}: {}, using default", key, val);
                default
            }
        },
        Err(_) => default,
    };

    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cadence_matches_the_dashboard() {
        let config = PollConfig::default();

        assert_eq!(config.inventory_interval, Duration::from_secs(30));
        assert_eq!(config.alerts_interval, Duration::from_secs(30));
        assert_eq!(config.patches_interval, Duration::from_secs(60));
        assert_eq!(config.schedules_interval, Duration::from_secs(60));
    }

    #[test]
    fn missing_env_value_falls_back_to_default() {
        assert_eq!(
            secs_from_env("AUTOOPS_NO_SUCH_KEY", 45),
            Duration::from_secs(45)
        );
    }
}
