use serde::{Deserialize, Serialize};

// Distance and duration arrive display-formatted from the route provider
// ("12,4 km", "25 min") and may be absent while the route is being computed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance: Option<String>,
    pub duration: Option<String>,
}

impl RouteSummary {
    pub fn new(distance: Option<String>, duration: Option<String>) -> Self {
        Self { distance, duration }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteMeasure {
    Pending,
    Measured {
        distance_km: f64,
        duration_minutes: u32,
    },
}

impl RouteMeasure {
    pub fn is_pending(&self) -> bool {
        match self {
            Self::Pending => true,
            _ => false,
        }
    }
}
