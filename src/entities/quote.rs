use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{RouteMeasure, ServiceTier};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub tier_id: Uuid,
    pub tier_name: String,
    pub measure: RouteMeasure,
    pub amount: f64,
    pub valid_until: DateTime<Utc>,
}

impl Quote {
    pub fn new(tier: &ServiceTier, measure: RouteMeasure, amount: f64) -> Self {
        Self {
            token: Uuid::new_v4(),
            tier_id: tier.id,
            tier_name: tier.name.clone(),
            measure,
            amount,
            valid_until: Utc::now() + Duration::minutes(10),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.valid_until
    }
}
