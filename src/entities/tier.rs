use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateCard {
    pub base_fare: f64,
    pub per_km: f64,
    pub per_minute: f64,
    pub per_stop: f64,
    pub minimum_price: f64,
}

impl RateCard {
    pub fn new(
        base_fare: f64,
        per_km: f64,
        per_minute: f64,
        per_stop: f64,
        minimum_price: f64,
    ) -> Self {
        Self {
            base_fare,
            per_km,
            per_minute,
            per_stop,
            minimum_price,
        }
    }

    // minimum_price is a floor configured independently of the linear
    // coefficients: it may exceed what they produce for short trips.
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            self.base_fare,
            self.per_km,
            self.per_minute,
            self.per_stop,
            self.minimum_price,
        ];

        for value in fields {
            if !value.is_finite() || value < 0.0 {
                tracing::warn!("rejecting rate card with field {:?}", value);
                return Err(invalid_input_error());
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceTier {
    pub id: Uuid,
    pub name: String,
    pub rates: RateCard,
}

impl ServiceTier {
    pub fn new(name: String, rates: RateCard) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            rates,
        }
    }
}
