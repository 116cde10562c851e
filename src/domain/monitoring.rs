// Service monitoring widget
use super::widget::Widget;
use crate::infrastructure::wire;
use serde::{Deserialize, Serialize};

/// Conventional status values; the dashboard accepts any string.
pub const MONITORING_UP: &str = "Up";
pub const MONITORING_DOWN: &str = "Down";

/// Up/down status of a service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Monitoring {
    pub status: String,
    #[serde(skip_serializing_if = "wire::is_blank")]
    pub down_time: Option<String>,
    #[serde(skip_serializing_if = "wire::is_blank")]
    pub response_time: Option<String>,
}

impl Monitoring {
    pub fn up() -> Self {
        Self::with_status(MONITORING_UP)
    }

    pub fn down() -> Self {
        Self::with_status(MONITORING_DOWN)
    }

    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Default::default()
        }
    }
}

impl Widget for Monitoring {
    fn kind(&self) -> &'static str {
        "monitoring"
    }
}
