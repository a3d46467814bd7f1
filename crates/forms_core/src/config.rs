use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Labels, alert text and timing used by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub forecast_working_label: String,
    pub email_working_label: String,
    /// `None` keeps the download button's own label while it is disabled.
    pub download_working_label: Option<String>,
    pub invalid_email_alert: String,
    pub download_reenable_ms: u64,
}

impl ControllerConfig {
    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_reenable_ms)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            forecast_working_label: "Generating...".to_string(),
            email_working_label: "Sending...".to_string(),
            download_working_label: None,
            invalid_email_alert: "Enter a valid email".to_string(),
            download_reenable_ms: 2000,
        }
    }
}
